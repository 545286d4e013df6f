//! Example: watching an element as the page scrolls

use onscreen::{MemoryGeometry, Monitor, MonitorOptions, RangeSpec, Rect, TickCause};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut geometry = MemoryGeometry::new(1024.0, 768.0);
    let hero = geometry.insert(Rect::from_xywh(0.0, 1600.0, 1024.0, 400.0));

    let mut monitor = Monitor::new(geometry);
    monitor.on_transition(|t| {
        let direction = if t.entered() { "entered" } else { "exited" };
        println!("{} {} view (scroll top {})", t.range, direction, t.snapshot.viewport.top);
    });

    println!("onscreen v{}", onscreen::VERSION);
    monitor.run(
        hero,
        MonitorOptions::default().ranges(RangeSpec::Radius(100.0)),
    );

    // Scroll the page in steps; the visible threshold trips on the way down
    for _ in 0..6 {
        monitor.geometry_mut().scroll_by(0.0, 300.0);
        monitor.tick(TickCause::Scroll);
    }
}
