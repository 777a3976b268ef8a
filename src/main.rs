//! AquaGrid demo front-end.
//!
//! A console stand-in for the dashboard: walks the zone catalog,
//! prints each reading, the alert list, an on-demand report, and the
//! normalized sparkline points.  Everything below is rendering glue;
//! the engine itself lives in the library.

use anyhow::Result;

use aquagrid::app::commands::Command;
use aquagrid::app::events::EngineEvent;
use aquagrid::app::ports::EventSink;
use aquagrid::app::service::ZoneService;
use aquagrid::config::EngineConfig;
use aquagrid::devices::DeviceKind;

/// Renders engine events straight to stdout.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Started { zone } => {
                println!("engine started on {zone}");
            }
            EngineEvent::ReadingUpdated(r) => {
                println!(
                    "[{}] water {:>2}% | flow {:>2} | turbidity {:.2} | pH {:.2} | leak {}",
                    r.zone,
                    r.water_pct,
                    r.flow_rate,
                    r.turbidity,
                    r.ph,
                    if r.leak { "YES" } else { "no" },
                );
            }
            EngineEvent::AlertsRaised { zone, count } => {
                println!("  !! {count} alert(s) raised for {zone}");
            }
            EngineEvent::ReportReady(report) => match serde_json::to_string_pretty(report) {
                Ok(json) => println!("report:\n{json}"),
                Err(e) => println!("report (unprintable: {e})"),
            },
            EngineEvent::DeviceChanged { device, on } => {
                println!(
                    "device {} is now {}",
                    device.label(),
                    if *on { "on" } else { "off" }
                );
            }
        }
    }
}

fn main() -> Result<()> {
    println!("AquaGrid demo engine v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::default();
    let catalog = config.zones.clone();
    let mut svc = ZoneService::new(config)?;
    let mut sink = ConsoleSink;

    svc.start(&mut sink)?;
    for zone in catalog.iter().skip(1) {
        svc.handle_command(Command::SelectZone(zone.clone()), &mut sink)?;
    }

    svc.handle_command(
        Command::GenerateReport {
            range: "daily".into(),
        },
        &mut sink,
    )?;

    let points = svc.chart_points(480.0, 120.0)?;
    let polyline: Vec<String> = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect();
    println!("sparkline: {}", polyline.join(" "));

    svc.handle_command(Command::ToggleDevice(DeviceKind::Pump), &mut sink)?;

    println!("alert log (newest first):");
    for alert in svc.alert_log().iter() {
        println!(
            "  #{:<3} [{}] {:?} {}",
            alert.id,
            alert.time,
            alert.severity,
            alert.message
        );
    }

    Ok(())
}
