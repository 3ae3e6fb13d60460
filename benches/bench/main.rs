// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod matchers;
mod samples;

criterion_main!(matchers::benches);
