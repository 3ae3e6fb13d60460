/// Periodic text with many overlapping partial matches.
pub fn periodic(n: usize) -> String {
    "abababcabababcabcabc".repeat(n)
}

/// Pseudo-random text over a four letter alphabet, stable between runs.
pub fn dna(n: usize) -> String {
    let mut state: u32 = 0x2545_f491;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            ['a', 'c', 'g', 't'][(state % 4) as usize]
        })
        .collect()
}
