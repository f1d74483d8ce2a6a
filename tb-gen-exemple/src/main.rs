use log::info;

use tb_gen_core::model::criteria::Distribution;
use tb_gen_core::render::{LineFormatter, TextFormatter};
use tb_gen_core::{GenerateOptions, Generator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log level defaults to 'info', override with RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Generator with the default Thunderball ranges (5 from 1-39, bonus 1-14)
    let mut generator = Generator::new();
    let formatter = TextFormatter::new(*generator.config());

    // Options start unconstrained with 5 lines
    let mut options = GenerateOptions::default();

    // Raw values are parsed once: "any" or a count
    options.set_odd("3")?;
    options.set_even("any")?;

    // Typed values can be set directly
    options.criteria.distribution = Distribution::Balanced;

    // Malformed values are rejected instead of coerced
    match options.set_low("three") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    info!("Generating {} line(s) with {:?}", options.lines, options.criteria);
    let lines = generator.generate(&options);
    println!("{}", formatter.format_lines(&lines));

    // Bands fixed to 2/2/2 can never add up to 5: every slot is dropped
    // and a warning is logged for each one
    let mut impossible = GenerateOptions::new(2);
    impossible.set_low("2")?;
    impossible.set_mid("2")?;
    impossible.set_high("2")?;
    let report = generator.generate_report(&impossible);
    println!("{} line(s) generated, {} slot(s) exhausted", report.lines.len(), report.exhausted.len());

    // Options can also come from JSON
    let from_json: GenerateOptions = serde_json::from_str(r#"{ "lines": 3, "high": "2", "distribution": "mid" }"#)?;
    let lines = generator.generate(&from_json);
    println!("{}", serde_json::to_string_pretty(&lines)?);

    Ok(())
}
