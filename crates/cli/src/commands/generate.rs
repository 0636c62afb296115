use anyhow::Result;
use plugmat_core::generator::{GeneratorConfig, MatrixGenerator};

pub fn execute(config: GeneratorConfig) -> Result<()> {
    let generator = MatrixGenerator::new(config);

    let records = generator.generate()?;
    generator.write_matrix(&records)?;

    Ok(())
}
