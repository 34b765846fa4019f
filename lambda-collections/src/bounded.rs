//! Capacity-bounded FIFO queue and double-ended queue.
//!
//! These back the `blocking-queue` and `blocking-deque` categories. Only the non-blocking
//! half of the usual blocking-queue surface exists: appends past capacity fail instead of
//! suspending the caller, and removals on an empty container return `None`.
use std::collections::{vec_deque, VecDeque};

use crate::error::{Error, Result};

/// A FIFO queue holding at most `capacity` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// An empty queue whose capacity is only limited by memory
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            capacity: usize::MAX,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            items: VecDeque::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append at the tail, failing with [`Error::CapacityExceeded`] when full
    pub fn offer(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Remove from the head
    pub fn poll(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A double-ended queue holding at most `capacity` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    /// An empty deque whose capacity is only limited by memory
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            capacity: usize::MAX,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            items: VecDeque::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_capacity(&self) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn offer_front(&mut self, item: T) -> Result<()> {
        self.check_capacity()?;
        self.items.push_front(item);
        Ok(())
    }

    pub fn offer_back(&mut self, item: T) -> Result<()> {
        self.check_capacity()?;
        self.items.push_back(item);
        Ok(())
    }

    pub fn poll_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn poll_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for BoundedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a BoundedDeque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for BoundedDeque<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
