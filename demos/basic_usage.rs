//! Basic usage example for lockbound
//!
//! Shows the queue and stack from several threads, the full/empty errors, and
//! the metrics each container collects.
//!
//! ```text
//! cargo run --example basic_usage
//! ```

use lockbound::{BoundedQueue, BoundedStack, Error, MetricsCollector};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("lockbound usage example");
    println!("=======================");

    // Queue basics
    println!("\n1. Queue:");
    let queue: Arc<BoundedQueue<i32>> = Arc::new(BoundedQueue::new(3));
    queue.enqueue(1)?;
    queue.enqueue(2)?;
    queue.enqueue(3)?;
    match queue.enqueue(4) {
        Err(Error::QueueFull) => println!("   enqueue(4) rejected: queue full"),
        other => println!("   unexpected result: {:?}", other),
    }
    println!("   dequeue -> {}", queue.dequeue()?);
    println!("   snapshot -> {:?}", queue.snapshot());
    println!("   search(3) -> {:?}", queue.search(&3));

    // Stack basics
    println!("\n2. Stack:");
    let stack = BoundedStack::new(1);
    stack.push("only")?;
    if let Err(error) = stack.push("second") {
        println!("   push(\"second\") rejected: {}", error);
    }
    println!("   pop -> {}", stack.pop()?);
    println!("   pop again -> {:?}", stack.pop());

    // Producers and consumers sharing one queue
    println!("\n3. Multi-producer / multi-consumer:");
    let shared: Arc<BoundedQueue<u32>> = Arc::new(BoundedQueue::new(16));

    let producers: Vec<_> = (0..4)
        .map(|id| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut retries = 0u32;
                for j in 0..25 {
                    let value = id * 25 + j;
                    // The queue never blocks; back off and try again when full.
                    while shared.enqueue(value).is_err() {
                        retries += 1;
                        thread::sleep(Duration::from_micros(50));
                    }
                }
                retries
            })
        })
        .collect();

    let consumers: Vec<_> = (0..2)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut sum = 0u64;
                for _ in 0..50 {
                    loop {
                        match shared.dequeue() {
                            Ok(value) => {
                                sum += u64::from(value);
                                break;
                            }
                            Err(_) => thread::sleep(Duration::from_micros(50)),
                        }
                    }
                }
                sum
            })
        })
        .collect();

    let retries: u32 = producers.into_iter().map(|h| h.join().unwrap()).sum();
    let sum: u64 = consumers.into_iter().map(|h| h.join().unwrap()).sum();
    println!("   producer retries on full: {}", retries);
    println!("   sum of consumed values: {} (expected 4950)", sum);

    // Metrics
    println!("\n4. Metrics:");
    let metrics = shared.metrics();
    println!("   total operations: {}", metrics.total_operations);
    println!("   success rate: {:.1}%", metrics.success_rate());
    println!("   contention rate: {:.1}%", metrics.contention_rate());
    println!("   peak length: {} / {}", metrics.peak_len, shared.capacity());
    println!("   avg op time: {:?}", metrics.avg_operation_time());

    println!("\nDone.");
    Ok(())
}
