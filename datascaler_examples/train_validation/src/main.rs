mod data;

use data::{CsvHeadersLoader, SplitConfig, load_data, train_validation_split};
use datascaler::{AnyScaler, DataScaler, ScalerKind};
use log::info;

// Usage: train_validation [csv_path] [scaler] [train_ratio]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/features.csv").to_string());
    let kind: ScalerKind = args.next().as_deref().unwrap_or("standardizer").parse()?;
    let train_ratio: f64 = match args.next() {
        Some(ratio) => ratio.parse()?,
        None => 0.7,
    };

    let features = load_data::<CsvHeadersLoader, _>(&path)?;
    info!("Loaded {} rows x {} columns from {}", features.nrows(), features.ncols(), path);

    let config = SplitConfig::new().with_train_ratio(train_ratio).with_seed(42);
    let (x_train, x_validation) = train_validation_split(&features, &config);

    // Statistics come from the training rows only
    let mut scaler = AnyScaler::<f64>::new(kind);
    let train_scaled = scaler.fit_transform(&x_train)?;
    let validation_scaled = scaler.transform(&x_validation)?;

    println!("Scaler: {}", scaler.kind());
    println!("Scaled training data:\n{:.4}", train_scaled);
    println!("Scaled validation data:\n{:.4}", validation_scaled);

    let restored = scaler.inverse_transform(&validation_scaled)?;
    let max_error = restored
        .iter()
        .zip(x_validation.iter())
        .filter(|(_, orig)| !orig.is_nan())
        .map(|(back, orig)| (back - orig).abs())
        .fold(0.0, f64::max);
    println!("Max round-trip error on validation data: {:e}", max_error);

    Ok(())
}
