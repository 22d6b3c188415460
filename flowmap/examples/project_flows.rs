//! Projects a small set of migration flows and prints their statistics.

use flowmap::data::{length_stats, weight_stats, Flow};
use flowmap_types::cartesian::Point2d;
use flowmap_types::geo::projections::MapProjection;
use flowmap_types::geo::GeoPoint2d;
use flowmap_types::latlon;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flows = vec![
        Flow::new(latlon!(47.38, 8.54), latlon!(52.52, 13.40), 1250.0),
        Flow::new(latlon!(52.52, 13.40), latlon!(48.86, 2.35), 830.0),
        Flow::new(latlon!(48.86, 2.35), latlon!(40.71, -74.01), 2100.0),
        Flow::new(latlon!(40.71, -74.01), latlon!(40.71, -74.01), 95.0),
    ];

    let self_loops = flows.iter().filter(|flow| flow.is_self_loop()).count();
    log::info!("loaded {} flows ({} self loops)", flows.len(), self_loops);

    let projection = MapProjection::Mercator.projection::<GeoPoint2d, Point2d>();

    let weights = weight_stats(&flows);
    let lengths = length_stats(&flows, &*projection);

    println!(
        "weights: min {} max {} avg {:.1}",
        weights.min(),
        weights.max(),
        weights.avg()
    );
    println!(
        "projected lengths: min {:.3} max {:.3}",
        lengths.min(),
        lengths.max()
    );

    let normalizer = weights.normalizer();
    for flow in &flows {
        match normalizer.normalize_log(flow.weight) {
            Ok(normalized) => println!("{:7.1} -> {:.3}", flow.weight, normalized),
            Err(error) => log::warn!("cannot normalize {}: {error}", flow.weight),
        }
    }
}
