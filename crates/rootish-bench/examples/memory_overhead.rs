//! Compare wasted slots between the rootish array stack and `Vec`.
//!
//! Run with: `cargo run -p rootish-bench --example memory_overhead`

use rootish::RootishArrayStack;
use rootish_bench::OverheadReport;

fn main() {
    println!(
        "{:>10} {:>8} {:>12} {:>12}",
        "len", "blocks", "stack spare", "vec spare"
    );
    for n in [10usize, 100, 1_000, 10_000, 100_000, 1_000_000] {
        let r = OverheadReport::measure(n);
        println!(
            "{:>10} {:>8} {:>12} {:>12}",
            r.len, r.stack_blocks, r.stack_spare, r.vec_spare
        );
    }

    // Shrinking: remove from the front and watch blocks being released.
    let mut stack: RootishArrayStack<u32> = (0..1_000).collect();
    println!("\nremoving 990 of 1000 elements from the front");
    for _ in 0..990 {
        stack.remove(0).expect("stack is non-empty");
    }
    let m = stack.metrics();
    println!(
        "len={} capacity={} blocks={} (allocated {}, released {}, shifted {})",
        stack.len(),
        stack.capacity(),
        stack.block_count(),
        m.blocks_allocated,
        m.blocks_released,
        m.elements_shifted
    );
    println!("{}", stack.memory_layout());
}
