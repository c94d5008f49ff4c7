/// PWM symbols, one per duty-cycle level. A UART frame is ten bits wide
/// with start and stop bits, and the high stop bit adds 0.1 to every level.
pub const SYMBOLS: [u8; NUM_SYMBOLS] = [
    0b0000_0000, // 0.1 duty cycle
    0b1000_0000, // 0.2 duty cycle
    0b1100_0000, // 0.3 duty cycle
    0b1110_0000, // 0.4 duty cycle
    0b1111_0000, // 0.5 duty cycle
    0b1111_1000, // 0.6 duty cycle
    0b1111_1100, // 0.7 duty cycle
    0b1111_1110, // 0.8 duty cycle
    0b1111_1111, // 0.9 duty cycle
];

pub const NUM_SYMBOLS: usize = 9;

/// Number of distinct 8-bit sample values.
pub const NUM_SAMPLE_VALUES: usize = 256;

/// Samples emitted per line of the generated header.
pub const CHUNK_SIZE: usize = 32;
