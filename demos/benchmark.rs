use flatq::Queue;
use std::time::Instant;

fn main() {
    const OPERATIONS: usize = 1_000_000;

    println!("Benchmarking flatq over {} operations", OPERATIONS);
    println!("------------------------------------------");

    // Benchmark sequential enqueue
    let mut queue = Queue::new();
    let start = Instant::now();

    for i in 0..OPERATIONS {
        queue.enqueue(i);
    }

    let enqueue_time = start.elapsed();
    println!(
        "enqueue: {:?} total, {:?} per operation (backing buffer grew to {} slots)",
        enqueue_time,
        enqueue_time / OPERATIONS as u32,
        queue.capacity()
    );

    // Benchmark sequential dequeue
    let start = Instant::now();
    let mut sum = 0;

    while let Ok(value) = queue.dequeue() {
        sum += value;
    }

    let dequeue_time = start.elapsed();
    println!(
        "dequeue: {:?} total, {:?} per operation",
        dequeue_time,
        dequeue_time / OPERATIONS as u32
    );
    println!("(Sum: {} - just to prevent optimization)", sum);

    // Benchmark a mixed random workload
    let mut queue = Queue::new();
    let mut max_capacity = queue.capacity();
    let start = Instant::now();

    for i in 0..OPERATIONS {
        if queue.is_empty() || fastrand::bool() {
            queue.enqueue(i);
        } else {
            let _ = queue.dequeue();
        }
        max_capacity = max_capacity.max(queue.capacity());
    }

    let mixed_time = start.elapsed();
    println!(
        "mixed enqueue/dequeue: {:?} total, {:?} per operation",
        mixed_time,
        mixed_time / OPERATIONS as u32
    );
    println!(
        "largest backing buffer: {} slots, {} elements live at the end",
        max_capacity,
        queue.len()
    );

    // Benchmark steady-state churn with one element in flight
    let mut queue = Queue::new();
    let start = Instant::now();

    for i in 0..OPERATIONS {
        queue.enqueue(i);
        let _ = queue.dequeue();
    }

    let churn_time = start.elapsed();
    println!(
        "enqueue+dequeue churn: {:?} total, {:?} per operation (capacity stays at {})",
        churn_time,
        churn_time / OPERATIONS as u32,
        queue.capacity()
    );

    // Benchmark iteration
    let queue: Queue<usize> = (0..OPERATIONS).collect();
    let start = Instant::now();
    let mut sum = 0;

    for _ in 0..10 {
        for value in &queue {
            sum += *value;
        }
    }

    let iter_time = start.elapsed();
    println!(
        "iteration: {:?} total, {:?} per full iteration",
        iter_time,
        iter_time / 10
    );
    println!("(Sum: {} - just to prevent optimization)", sum);
}
