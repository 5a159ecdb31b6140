use branchflow::{classify, DiagramFormat, RenderCapability, RunnerConfig, WorkflowRunner};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = RunnerConfig::default();
    let runner: WorkflowRunner = match config.runner_builder().build() {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Failed to build workflow: {}", e);
            std::process::exit(1);
        }
    };

    for input_value in &config.inputs {
        let output = runner.invoke_value(*input_value);
        match output.to_value() {
            Ok(record) => println!(
                "Result with {} input ({}): {}",
                classify(*input_value),
                input_value,
                record
            ),
            Err(e) => eprintln!("Failed to serialize result for {}: {}", input_value, e),
        }
    }

    let heading = match runner.render_capability() {
        RenderCapability::Supported(DiagramFormat::Dot) => "DOT Graph Representation",
        _ => "Mermaid Graph Representation",
    };
    println!("\n{}:\n", heading);
    println!("{}", runner.draw());
}
