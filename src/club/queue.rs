//! Bounded waiting queue

use std::collections::VecDeque;

use crate::types::ClientName;

/// First-come-first-served queue of clients waiting for a table
#[derive(Debug, Clone)]
pub struct ClientQueue {
    queue: VecDeque<ClientName>,
    capacity: usize,
}

impl ClientQueue {
    /// Create an empty queue holding at most `capacity` clients
    pub fn new(capacity: usize) -> Self {
        Self { queue: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append a client to the tail
    ///
    /// Callers check [`ClientQueue::is_full`] first.
    pub fn push(&mut self, client: ClientName) {
        debug_assert!(!self.is_full(), "pushed {} into a full queue", client);
        self.queue.push_back(client);
    }

    /// Remove and return the longest-waiting client
    pub fn pop(&mut self) -> Option<ClientName> {
        self.queue.pop_front()
    }

    /// Drop a specific client from the queue, returning whether it was queued
    pub fn remove(&mut self, client: &ClientName) -> bool {
        match self.queue.iter().position(|queued| queued == client) {
            Some(position) => {
                self.queue.remove(position);
                true
            }
            None => false,
        }
    }

    /// Empty the queue
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Check if nobody is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Check if the queue reached its capacity
    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    /// Number of waiting clients
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Maximum number of waiting clients
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = ClientQueue::new(3);
        queue.push("alice".into());
        queue.push("bob".into());

        assert_eq!(queue.pop(), Some(ClientName::from("alice")));
        assert_eq!(queue.pop(), Some(ClientName::from("bob")));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_queue_capacity() {
        let mut queue = ClientQueue::new(2);
        assert!(queue.is_empty());
        assert!(!queue.is_full());

        queue.push("alice".into());
        queue.push("bob".into());
        assert!(queue.is_full());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.capacity(), 2);

        queue.pop();
        assert!(!queue.is_full());
    }

    #[test]
    fn test_queue_remove_keeps_order() {
        let mut queue = ClientQueue::new(3);
        queue.push("alice".into());
        queue.push("bob".into());
        queue.push("carol".into());

        assert!(queue.remove(&"bob".into()));
        assert!(!queue.remove(&"dave".into()));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(ClientName::from("alice")));
        assert_eq!(queue.pop(), Some(ClientName::from("carol")));
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = ClientQueue::new(1);
        queue.push("alice".into());
        queue.clear();
        assert!(queue.is_empty());
    }
}
