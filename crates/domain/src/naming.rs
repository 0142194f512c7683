/// Returns whether a free-text asset assignment names `full_name`.
///
/// The name must appear as a whole: the characters on either side of the
/// occurrence, when present, must not be alphanumeric. `"Jane Smith (HR)"`
/// names `"Jane Smith"`, `"Jane Smith2"` does not. Two people sharing a full
/// name cannot be told apart.
#[must_use]
pub fn assignment_matches(assignment: &str, full_name: &str) -> bool {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = assignment.get(from..).and_then(|rest| rest.find(full_name)) {
        let start = from + offset;
        let before = assignment
            .get(..start)
            .and_then(|head| head.chars().next_back());
        let after = assignment
            .get(start + full_name.len()..)
            .and_then(|tail| tail.chars().next());

        if !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        {
            return true;
        }

        // Occurrences can overlap.
        from = start
            + assignment
                .get(start..)
                .and_then(|tail| tail.chars().next())
                .map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::assignment_matches;

    #[test]
    fn exact_name_matches() {
        assert!(assignment_matches("Jane Smith", "Jane Smith"));
    }

    #[test]
    fn name_inside_decorated_assignment_matches() {
        assert!(assignment_matches("Jane Smith (HR)", "Jane Smith"));
        assert!(assignment_matches("Spare, Jane Smith", "Jane Smith"));
    }

    #[test]
    fn near_miss_does_not_match() {
        assert!(!assignment_matches("Jane Smith2", "Jane Smith"));
        assert!(!assignment_matches("Jane Smithers", "Jane Smith"));
        assert!(!assignment_matches("MaryJane Smith", "Jane Smith"));
    }

    #[test]
    fn later_occurrence_can_match_after_near_miss() {
        assert!(assignment_matches("Jane Smithers / Jane Smith", "Jane Smith"));
    }

    #[test]
    fn overlapping_occurrence_can_match_after_near_miss() {
        assert!(assignment_matches("xBo Bo Bo", "Bo Bo"));
        assert!(!assignment_matches("xBo Bo Box", "Bo Bo"));
    }

    #[test]
    fn blank_name_never_matches() {
        assert!(!assignment_matches("Jane Smith", " "));
    }

    proptest! {
        #[test]
        fn name_always_matches_itself(first in "[A-Z][a-z]{1,8}", last in "[A-Z][a-z]{1,8}") {
            let full_name = format!("{first} {last}");
            prop_assert!(assignment_matches(&full_name, &full_name));
        }

        #[test]
        fn trailing_digit_breaks_the_match(
            first in "[A-Z][a-z]{1,8}",
            last in "[A-Z][a-z]{1,8}",
            digit in 0_u8..10,
        ) {
            let full_name = format!("{first} {last}");
            let assignment = format!("{full_name}{digit}");
            prop_assert!(!assignment_matches(&assignment, &full_name));
        }
    }
}
