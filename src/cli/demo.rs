use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use finalstate::event::{EventHeader, EVENT_PLANE_UNSET};
use finalstate::particle::{Hadron, Parton, PartonShower};
use finalstate::registry;
use finalstate::writer::{EventWriter, WriterConfig};

/// Write a deterministic mock event stream through a registered writer.
pub fn run(
    output: PathBuf,
    writer_name: &str,
    events: u64,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => WriterConfig::from_toml_file(&path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => WriterConfig::default(),
    };

    let Some(mut writer) = registry::create(writer_name, &output, config) else {
        anyhow::bail!(
            "Unknown writer '{}'; registered writers: {}",
            writer_name,
            registry::WRITERS
                .iter()
                .map(|registration| registration.name)
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    info!("finalstate demo");
    info!("===============");
    info!("Writer: {}", writer_name);
    info!("Output: {}", output.display());
    info!("Events: {}", events);

    writer.init(true).context("Failed to open output sink")?;

    for event in 0..events {
        let (header, shower, hadrons) = mock_event(event);
        writer.set_header(header);

        // Feed both record streams; the writer buffers the kind it records.
        writer.write_shower(&Arc::downgrade(&shower));
        for hadron in &hadrons {
            writer.write_hadron(&Arc::downgrade(hadron));
        }

        writer.exec();
        writer
            .write_event()
            .with_context(|| format!("Failed to write event {}", event + 1))?;
    }

    let stats = writer.close().context("Failed to close writer")?;
    info!("Demo complete!");
    info!("  {}", stats);

    let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    info!("  File size: {} bytes", file_size);

    Ok(())
}

/// Build one mock event: header, a small parton shower, and a hadron burst.
///
/// Kinematics are simple closed-form functions of the event index so runs
/// are reproducible.
fn mock_event(event: u64) -> (EventHeader, Arc<PartonShower>, Vec<Arc<Hadron>>) {
    let phase = event as f64;

    let header = EventHeader {
        event_weight: 1.0 / (1.0 + phase),
        event_plane_angle: if event % 2 == 0 {
            EVENT_PLANE_UNSET
        } else {
            0.1 * phase
        },
        vertex_x: 0.05 * phase.cos(),
        vertex_y: 0.05 * phase.sin(),
        vertex_z: 0.0,
        pt_hat: 20.0 + 5.0 * phase,
        sigma_gen: 5.2,
        sigma_err: 0.1,
    };

    let mut shower = PartonShower::new();
    // One intermediate gluon that branches into two final-state quarks.
    shower.add_parton(
        Parton::new(21, 0, 30.0 + phase, 0.0, 0.0, 30.0 + phase),
        false,
    );
    shower.add_parton(
        Parton::new(1, 0, 16.0, 4.0 * phase.cos(), 4.0 * phase.sin(), 15.0),
        true,
    );
    shower.add_parton(
        Parton::new(-1, 0, 14.0, -4.0 * phase.cos(), -4.0 * phase.sin(), 13.0),
        true,
    );

    let hadrons: Vec<Arc<Hadron>> = (0..4)
        .map(|i| {
            let angle = phase + f64::from(i);
            let pid = if i % 2 == 0 { 211 } else { -211 };
            Arc::new(Hadron::new(
                pid,
                0,
                2.0 + f64::from(i),
                angle.cos(),
                angle.sin(),
                0.5 * f64::from(i),
            ))
        })
        .collect();

    (header, Arc::new(shower), hadrons)
}
