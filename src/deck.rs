//! Card Stack Operations
//!
//! Pure ordering/merge semantics for the swipe deck. The front card is
//! index 0; only the first `VISIBLE_WINDOW` items are rendered, the rest
//! ride along for the next merge.

use crate::models::Product;

/// How many cards the deck renders at once
pub const VISIBLE_WINDOW: usize = 3;

/// Drop the front card. Called once per committed decision.
pub fn remove_top(stack: &mut Vec<Product>) {
    if !stack.is_empty() {
        stack.remove(0);
    }
}

/// Install follow-on recommendations: `new_items ++ stack[1..]`.
/// The single then-current top is dropped no matter how far the stack
/// has advanced since the decision was dispatched.
pub fn prepend_and_trim_top(stack: &mut Vec<Product>, new_items: Vec<Product>) {
    let mut merged = new_items;
    merged.extend(stack.drain(..).skip(1));
    dedup_adjacent(&mut merged);
    *stack = merged;
}

/// Manual "jump to similar item": the selection goes straight to the
/// front, nothing is trimmed.
pub fn push_front(stack: &mut Vec<Product>, item: Product) {
    stack.insert(0, item);
    dedup_adjacent(stack);
}

/// No id may sit next to itself after a merge. Duplicates further apart
/// are fine since only the front three are rendered.
fn dedup_adjacent(stack: &mut Vec<Product>) {
    stack.dedup_by_key(|item| item.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            price: serde_json::Value::from(id),
            image: format!("http://img/{}.jpg", id),
        }
    }

    fn ids(stack: &[Product]) -> Vec<u32> {
        stack.iter().map(|p| p.id).collect()
    }

    #[test]
    fn remove_top_drops_front() {
        let mut stack = vec![item(1), item(2), item(3)];
        remove_top(&mut stack);
        assert_eq!(ids(&stack), vec![2, 3]);
    }

    #[test]
    fn remove_top_on_empty_is_noop() {
        let mut stack: Vec<Product> = vec![];
        remove_top(&mut stack);
        assert!(stack.is_empty());
    }

    #[test]
    fn follow_ons_replace_the_current_top() {
        // Stack [X,Y,Z] with follow-ons [A,B] becomes [A,B,Y,Z]
        let mut stack = vec![item(10), item(20), item(30)];
        prepend_and_trim_top(&mut stack, vec![item(1), item(2)]);
        assert_eq!(ids(&stack), vec![1, 2, 20, 30]);
    }

    #[test]
    fn follow_ons_into_empty_stack() {
        let mut stack: Vec<Product> = vec![];
        prepend_and_trim_top(&mut stack, vec![item(1)]);
        assert_eq!(ids(&stack), vec![1]);
    }

    #[test]
    fn dispatcher_path_end_to_end() {
        // Commit on [1,2,3,4]: top removed immediately, follow-ons [9,10]
        // merged when the response arrives
        let mut stack = vec![item(1), item(2), item(3), item(4)];
        remove_top(&mut stack);
        assert_eq!(ids(&stack), vec![2, 3, 4]);
        prepend_and_trim_top(&mut stack, vec![item(9), item(10)]);
        assert_eq!(ids(&stack), vec![9, 10, 3, 4]);
    }

    #[test]
    fn jump_to_similar_does_not_trim() {
        let mut stack = vec![item(10), item(20), item(30)];
        push_front(&mut stack, item(5));
        assert_eq!(ids(&stack), vec![5, 10, 20, 30]);
    }

    #[test]
    fn adjacent_duplicates_collapse_after_merge() {
        let mut stack = vec![item(7), item(8)];
        push_front(&mut stack, item(7));
        assert_eq!(ids(&stack), vec![7, 8]);

        let mut stack = vec![item(1), item(2), item(3)];
        prepend_and_trim_top(&mut stack, vec![item(5), item(2)]);
        // 2 ends up next to itself and collapses; later duplicates survive
        assert_eq!(ids(&stack), vec![5, 2, 3]);
    }

    #[test]
    fn non_adjacent_duplicates_are_tolerated() {
        let mut stack = vec![item(1), item(2), item(3)];
        prepend_and_trim_top(&mut stack, vec![item(2), item(9)]);
        assert_eq!(ids(&stack), vec![2, 9, 2, 3]);
    }
}
