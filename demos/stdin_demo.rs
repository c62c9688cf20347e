use flatq::Queue;
use std::io::{self, Read, Write};

// Reads whitespace-delimited tokens from stdin. Every token other than "-"
// is enqueued; each "-" dequeues one item and prints it. Try:
//
//     echo "to be or not to - be - - that - - - is" | cargo run --example stdin_demo
fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");

    let mut stdout = io::stdout().lock();
    let mut queue = Queue::new();
    for token in input.split_whitespace() {
        if token != "-" {
            queue.enqueue(token);
        } else if !queue.is_empty() {
            let item = queue.dequeue().expect("Queue should not be empty");
            write!(stdout, "{} ", item).expect("Failed to write to stdout");
        }
    }
    writeln!(stdout, "({} left on queue)", queue.len()).expect("Failed to write to stdout");
}
