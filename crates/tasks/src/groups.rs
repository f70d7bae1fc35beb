//! Sorted intersection of two delimiter-joined member lists

use std::collections::HashSet;

/// Members present in both groups, sorted.
///
/// Each group is a single string of names joined by `separator`. Duplicate
/// names within a group collapse; the result contains each common name once.
pub fn common_participants(first_group: &str, second_group: &str, separator: char) -> Vec<String> {
    let first: HashSet<&str> = first_group.split(separator).collect();
    let second: HashSet<&str> = second_group.split(separator).collect();

    let mut matches: Vec<String> = first
        .intersection(&second)
        .map(|name| name.to_string())
        .collect();
    matches.sort();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_participants() {
        let matches = common_participants(
            "Иванов|Петров|Сидоров",
            "Петров|Сидоров|Смирнов",
            '|',
        );
        assert_eq!(matches, vec!["Петров", "Сидоров"]);
    }

    #[test]
    fn test_no_overlap() {
        assert!(common_participants("a,b", "c,d", ',').is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let matches = common_participants("a,a,b", "a,b,b", ',');
        assert_eq!(matches, vec!["a", "b"]);
    }

    #[test]
    fn test_result_is_sorted() {
        let matches = common_participants("c,b,a", "b,a,c", ',');
        assert_eq!(matches, vec!["a", "b", "c"]);
    }
}
