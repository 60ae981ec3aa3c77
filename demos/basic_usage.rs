use growarray::{GrowableArray, GrowthConfig};

fn main() {
    // Start tiny with a 4x growth step to make the growth events visible.
    let config = GrowthConfig::new(1, 0.25);
    let mut array = GrowableArray::from_config(&config);

    for value in 1..=20 {
        let before = array.capacity();
        array.push(value * 10);
        if array.capacity() != before {
            println!("grew {before} -> {} at len {}", array.capacity(), array.len());
        }
    }

    println!("len {} capacity {}", array.len(), array.capacity());
    println!("at(0) = {:?}", array.at(0));
    println!("at(99) = {:?}", array.at(99));

    let compacted = array.compact();
    println!("compacted {} elements: {:?}", compacted.len(), compacted);

    let doubled: Vec<i32> = array.iter().map(|v| v * 2).collect();
    println!("doubled: {doubled:?}");

    // Pre-populated arrays start exactly full.
    let full = GrowableArray::from_items(&GrowthConfig::default(), [1, 2, 3]);
    println!("from items: {:?} (capacity {})", full, full.capacity());
}
