//! Step Tree Utilities
//!
//! Helper functions for rendering nested recipe steps.

use crate::models::Step;

/// Render a nested step tree as indented rows using recursive DFS
/// Returns (text, depth) pairs in display order
pub fn flatten_steps(steps: &[Step]) -> Vec<(String, usize)> {
    // Recursive helper: pre-order, children one level deeper
    fn collect(steps: &[Step], depth: usize, result: &mut Vec<(String, usize)>) {
        for step in steps {
            match step {
                Step::Leaf(text) => result.push((text.clone(), depth)),
                Step::Group { text, substeps } => {
                    result.push((text.clone(), depth));
                    collect(substeps, depth + 1, result);
                }
            }
        }
    }

    let mut result = Vec::new();
    collect(steps, 0, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Step {
        Step::Leaf(text.to_string())
    }

    fn group(text: &str, substeps: Vec<Step>) -> Step {
        Step::Group {
            text: text.to_string(),
            substeps,
        }
    }

    #[test]
    fn test_flatten_steps() {
        // Leaf A, then group B whose second child is itself a group
        let steps = vec![
            leaf("A"),
            group(
                "B",
                vec![leaf("C"), group("D", vec![leaf("E"), leaf("F")])],
            ),
        ];

        let rows = flatten_steps(&steps);

        // Should be: A (depth 0), B (0), C (1), D (1), E (2), F (2)
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], ("A".to_string(), 0));
        assert_eq!(rows[1], ("B".to_string(), 0));
        assert_eq!(rows[2], ("C".to_string(), 1));
        assert_eq!(rows[3], ("D".to_string(), 1));
        assert_eq!(rows[4], ("E".to_string(), 2));
        assert_eq!(rows[5], ("F".to_string(), 2));
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_steps(&[]).is_empty());
    }

    #[test]
    fn test_flatten_deep_chain() {
        let steps = vec![group("outer", vec![group("inner", vec![leaf("base")])])];

        let rows = flatten_steps(&steps);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].1, 0);
        assert_eq!(rows[1].1, 1);
        assert_eq!(rows[2].1, 2);
    }
}
