use std::fmt;

use log::trace;

// owning link to the rest of the chain; None marks the end
type Link<T> = Option<Box<Node<T>>>;

pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    // a fresh node has no successor
    pub fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

// value only so a long chain cannot overflow the stack in the formatter
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// singly linked chain owned through head; every node has exactly one owner,
// so the chain is acyclic by construction
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    // node becomes the new head, the prior head becomes its successor
    pub fn push_front(&mut self, mut node: Node<T>) {
        node.next = self.head.take();
        self.head = Some(Box::new(node));
    }

    pub fn push_back(&mut self, node: Node<T>) {
        debug_assert!(node.next.is_none());
        let mut cur = &mut self.head;
        while let Some(curr) = cur {
            cur = &mut curr.next;
        }
        *cur = Some(Box::new(node));
    }

    // splice node in front of the first match in scan order; a missed target
    // leaves the list untouched and hands the node back
    pub fn insert_before(&mut self, mut node: Node<T>, value: &T) -> Result<(), Node<T>>
    where
        T: PartialEq,
    {
        if let Some(head) = &self.head {
            if head.value == *value {
                trace!("insert_before: matched head");
                self.push_front(node);
                return Ok(());
            }
        }
        let mut pos = 1;
        let mut cur = &mut self.head;
        while let Some(curr) = cur {
            if let Some(next) = &curr.next {
                if next.value == *value {
                    node.next = curr.next.take();
                    curr.next = Some(Box::new(node));
                    trace!("insert_before: spliced at position {}", pos);
                    return Ok(());
                }
            }
            pos += 1;
            cur = &mut curr.next;
        }
        trace!("insert_before: no match, list unchanged");
        Err(node)
    }

    // splice node behind the first match in scan order
    pub fn insert_after(&mut self, mut node: Node<T>, value: &T) -> Result<(), Node<T>>
    where
        T: PartialEq,
    {
        let mut pos = 0;
        let mut cur = &mut self.head;
        while let Some(curr) = cur {
            if curr.value == *value {
                node.next = curr.next.take();
                curr.next = Some(Box::new(node));
                trace!("insert_after: matched at position {}", pos);
                return Ok(());
            }
            pos += 1;
            cur = &mut curr.next;
        }
        trace!("insert_after: no match, list unchanged");
        Err(node)
    }

    // unlink the first node carrying the value and return the value; a missed
    // target leaves the list untouched
    pub fn remove_first(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        if let Some(head) = &self.head {
            if head.value == *value {
                trace!("remove_first: removed head");
                return self.pop_front();
            }
        }
        let mut pos = 1;
        let mut cur = &mut self.head;
        while let Some(curr) = cur {
            if let Some(next) = &curr.next {
                if next.value == *value {
                    if let Some(mut removed) = curr.next.take() {
                        curr.next = removed.next.take();
                        trace!("remove_first: removed at position {}", pos);
                        return Some(removed.value);
                    }
                }
            }
            pos += 1;
            cur = &mut curr.next;
        }
        trace!("remove_first: no match, list unchanged");
        None
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // the model stores only head, so length is a walk
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> LinkedList<T> {
        LinkedList::new()
    }
}

// unlink node by node so a long chain cannot overflow the stack on drop
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> LinkedList<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> LinkedList<T> {
        let mut list = LinkedList::new();
        let mut cur = &mut list.head;
        for value in iter {
            cur = &mut cur.insert(Box::new(Node::new(value))).next;
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
