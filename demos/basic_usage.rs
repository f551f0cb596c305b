// ============================================================================
// Basic Usage Example
// ============================================================================

use dimval::prelude::*;

fn main() -> Result<(), Error> {
    #[cfg(feature = "logging")]
    dimval::logging::init();

    println!("=== Dimensioned Values Example ===\n");

    // Restrict the process to a handful of tags
    let previous = UnitsConfig::restricted()
        .with_unit("m")
        .with_unit("s")
        .with_unit("apples")
        .install()?;
    println!("Installed unit registry (previously restricted: {})\n", previous.is_restricted());

    let track = Dim::new(400.0, "m")?;
    let sprint = Dim::new(100.0, "m")?;
    let lap_time = Dim::new(52.5, "s")?;

    println!("Track:    {}", track);
    println!("Sprint:   {}", sprint);
    println!("Lap time: {}  ({:?})\n", lap_time, lap_time);

    // Additive operations need tagged operands
    let total = track.checked_add(&sprint)?;
    println!("track + sprint      = {}", total);
    match track.checked_add(100.0) {
        Ok(value) => println!("track + 100         = {}", value),
        Err(err) => println!("track + 100         -> error: {}", err),
    }

    // Scaling operations accept bare numbers
    println!("track * 2.5         = {}", track.checked_mul(2.5)?);
    println!("track / 3           = {}", track.checked_div(3.0)?);
    println!("1000 // track       = {}", track.checked_rfloor_div(1000.0)?);

    // Comparisons
    println!("\nsprint < track      = {}", sprint.try_lt(&track)?);
    match sprint.try_lt(500.0) {
        Ok(value) => println!("sprint < 500        = {}", value),
        Err(err) => println!("sprint < 500        -> error: {}", err),
    }

    // Scalar failures pass through untouched
    let basket = Dim::new(12i64, "apples")?;
    println!("\nbasket // 5         = {}", basket.checked_floor_div(5i64)?);
    match basket.checked_rem(0i64) {
        Ok(value) => println!("basket % 0          = {}", value),
        Err(err) => println!("basket % 0          -> error: {}", err),
    }

    // Unknown tags are rejected
    match Dim::new(3.0, "ft") {
        Ok(value) => println!("\nCreated {}", value),
        Err(err) => println!("\nDim::new(3.0, \"ft\") -> error: {}", err),
    }

    // Debug form parses back
    let parsed: Dim<f64> = format!("{:?}", lap_time).parse()?;
    println!("Round trip of {:?}: {}", lap_time, parsed);

    println!("\nAs primitives: {} / {}", track.to_f64(), lap_time.trunc()?);

    registry::reset();
    Ok(())
}
