//! Built-in demonstration suite. Mirrors the layout of the peripheral
//! harnesses: each section registers thin, self-contained checks so the
//! binary runs end to end without hardware attached. Real deployments
//! replace this module with sections wrapping their driver calls.

use crate::app::case::TestCase;
use crate::app::error::Error;
use crate::app::outcome::Verdict;
use crate::app::registry::SectionRegistry;
use std::time::{Duration, Instant};

pub fn builtin() -> Result<SectionRegistry, Error> {
    let mut registry = SectionRegistry::new();

    registry.register(
        "clock",
        "Clock Sanity",
        "Monotonic clock behavior the harness timing relies on",
        true,
        None,
    )?;
    registry.add_cases(
        "clock",
        vec![
            TestCase::new("monotonic ordering", || {
                let first = Instant::now();
                let second = Instant::now();
                Verdict::from(second >= first)
            }),
            TestCase::new("elapsed accumulates", || {
                let started = Instant::now();
                std::thread::sleep(Duration::from_millis(1));
                if started.elapsed() >= Duration::from_millis(1) {
                    Verdict::pass()
                } else {
                    Verdict::fail("sleep did not advance the monotonic clock")
                }
            }),
        ],
    )?;

    registry.register(
        "ordering",
        "Ordering Guarantees",
        "Insertion-order behavior the registry and result list depend on",
        true,
        None,
    )?;
    registry.add_cases(
        "ordering",
        vec![
            TestCase::new("vector preserves insertion order", || {
                let values: Vec<u32> = (0..16).collect();
                Verdict::from(values.windows(2).all(|pair| pair[0] < pair[1]))
            }),
            TestCase::new("percentage formatting", || {
                Verdict::from(format!("{:.1}%", 50.0_f64) == "50.0%")
            }),
        ],
    )?;

    // Disabled by default: enable through the manifest (or -s guards) to see
    // failure and panic reporting in action.
    registry.register(
        "guards",
        "Guard Rails",
        "Failure paths the runner absorbs without aborting the run",
        false,
        None,
    )?;
    registry.add_cases(
        "guards",
        vec![
            TestCase::new("deliberate failure", || {
                Verdict::fail("this case always fails to exercise failure reporting")
            }),
            TestCase::new("deliberate panic", || {
                panic!("this case always panics to exercise panic conversion")
            }),
        ],
    )?;

    Ok(registry)
}
