use std::fmt;

use crate::list::{IntoIter, Iter, LinkedList, Node};

// LIFO adapter over the list; the list head is always the stack top
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    // seed a single-node list with an initial top value
    pub fn with_top(value: T) -> Stack<T> {
        let mut stack = Stack::new();
        stack.push(value);
        stack
    }

    pub fn push(&mut self, value: T) {
        self.list.push_front(Node::new(value));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    // top-down, the order pop would drain
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Stack<T> {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Stack<T>) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_with_top_seeds_single_value() {
        let stack = Stack::with_top(5);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&5));
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(2));
    }

    #[test]
    fn test_empty_pop_and_peek() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_contains() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        assert!(stack.contains(&"a"));
        assert!(!stack.contains(&"c"));
    }

    #[test]
    fn test_iter_is_top_down() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        let seen: Vec<i32> = stack.iter().cloned().collect();
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn test_into_iter_drains_in_pop_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        let drained: Vec<i32> = stack.into_iter().collect();
        assert_eq!(drained, vec![2, 1]);
    }

    #[test]
    fn test_clone_and_eq() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        let copy = stack.clone();
        assert_eq!(stack, copy);
        stack.push(3);
        assert_ne!(stack, copy);
    }

    #[test]
    fn test_debug_renders_top_first() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }
}
