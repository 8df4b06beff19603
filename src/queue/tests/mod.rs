//! Test modules for the queue containers
//!
//! - `heap` - percolation, ordering and the heap invariant
//! - `blocking` - FIFO, permits, builder truncation and push contexts
//! - `concurrent` - producer/consumer backpressure across threads
//! - `edge_cases` - empty queues, zero capacity and degenerate comparators

mod edge_cases;
