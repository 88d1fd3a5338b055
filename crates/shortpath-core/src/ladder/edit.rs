//! Edit-distance adjacency between words

/// Levenshtein distance between two words, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Whether `a` and `b` are at most `max` edits apart.
///
/// Uses a single linear pass when `max == 1` and the full table otherwise.
pub fn within_edit_distance(a: &str, b: &str, max: usize) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > max {
        return false;
    }
    if max == 1 {
        return within_one_edit(a, b, len_a, len_b);
    }
    edit_distance(a, b) <= max
}

/// Two-pointer check, valid only for a bound of exactly one edit
fn within_one_edit(a: &str, b: &str, len_a: usize, len_b: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (mut i, mut j, mut diffs) = (0, 0, 0);
    while i < len_a && j < len_b {
        if a[i] != b[j] {
            diffs += 1;
            if diffs > 1 {
                return false;
            }
            match len_a.cmp(&len_b) {
                std::cmp::Ordering::Greater => i += 1,
                std::cmp::Ordering::Less => j += 1,
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        } else {
            i += 1;
            j += 1;
        }
    }

    diffs + (len_a - i) + (len_b - j) <= 1
}

/// Two words are adjacent on a ladder when they differ by one edit at most
pub fn is_adjacent(a: &str, b: &str) -> bool {
    within_edit_distance(a, b, 1)
}
