use uintn::{ByteBuffer, UintNArray, UintNError, WordSeq};

fn main() {
    println!("=== UintN Array Examples ===\n");

    // Example 1: Storing small integers
    let _ = example_small_integers();

    // Example 2: Views over shared bytes
    let _ = example_views();

    // Example 3: Converting between bases
    let _ = example_base_conversion();

    // Example 4: Memory comparison
    let _ = example_memory_savings();
}

fn example_small_integers() -> Result<(), UintNError> {
    println!("Example 1: Storing RGB color indices (5 bits each)");

    let mut colors = UintNArray::new(5, 3)?;

    // Store palette indices (0-31)
    colors.set(0, 15); // Red shade
    colors.set(1, 8); // Green shade
    colors.set(2, 23); // Blue shade

    println!("  Stored {} colors in {} bytes", colors.len(), colors.buffer().byte_length());
    for (i, color) in colors.words().enumerate() {
        println!("  Color {}: {}", i, color);
    }

    // Values wider than 5 bits keep only their low bits
    colors.set(0, 40);
    println!("  40 stored as {}", colors.get(0).unwrap_or_default());
    println!();

    Ok(())
}

fn example_views() -> Result<(), UintNError> {
    println!("Example 2: Several views over one buffer");

    let buffer = ByteBuffer::wrap(vec![0x12, 0x34, 0x56, 0x78]);
    let nibbles = UintNArray::from_buffer(4, buffer.clone(), None, None)?;
    let mut middle = nibbles.subarray(2..6);

    println!("  Nibbles: {}", nibbles);
    println!("  Middle:  {} (starts at byte {})", middle, middle.byte_offset());

    middle.fill(0);
    println!("  After clearing the middle: {}", nibbles);
    println!("  Buffer bytes: {:02x?}", buffer.to_vec());
    println!();

    Ok(())
}

fn example_base_conversion() -> Result<(), UintNError> {
    println!("Example 3: Right-aligned base conversion");

    let number = UintNArray::from_words(-32, [512_313])?;
    for base in [-4i8, -7, -9, -12] {
        let digits = number.reinterpret(base, None)?.trim_zeros();
        println!("  512313 in {:>2}-bit digits: {}", -base, digits);
    }
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), UintNError> {
    println!("Example 4: Memory savings comparison");

    let count = 10_000u32;

    // Standard Vec<u32>
    let standard_bytes = count as usize * 4;

    // 12-bit words (values 0-4095)
    let packed = UintNArray::from_words(12, (0..count).map(|i| i % 4096))?;
    let packed_bytes = packed.buffer().byte_length();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
