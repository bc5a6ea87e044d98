use snowfield::{RunError, Simulation, DEFAULT_DENSITY};

fn main() -> Result<(), RunError> {
    let density = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DENSITY);

    Simulation::new().with_density(density).run()
}
