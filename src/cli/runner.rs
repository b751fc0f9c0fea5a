use tracing::info;

use symslice::SliceParams;

use super::args::CliArgs;

fn params_from_args(args: &CliArgs) -> symslice::Result<SliceParams> {
    match &args.params {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            SliceParams::from_json_file(path)
        }
        None => Ok(SliceParams {
            sheet: args.sheet.clone(),
            secondary: args.secondary.clone(),
            output_dir: args.output_dir.clone(),
            filter: args.filter,
        }),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = params_from_args(&args)?;
    let report = symslice::run(&params)?;

    info!("Done: {}", report.names().join(", "));
    Ok(())
}
