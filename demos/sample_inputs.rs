//! Sample Inputs
//!
//! Runs the floating-point recognizer over a fixed set of literals and
//! prints the verdict for each.
//!
//! Run with: cargo run --example sample_inputs

use floatdfa::Recognizer;

const INPUTS: [&str; 12] = [
    // accepted
    "33", "3.0", "+3.0", "-3E+8", "-3e+8", "-33.33E-9", ".390",
    // rejected
    "+.3", "-.45.45", "E-9", ".E.9", "nine",
];

fn main() {
    let recognizer = Recognizer::new();

    for input in INPUTS {
        println!("is {input} valid? {}", recognizer.recognize(input));
    }
}
