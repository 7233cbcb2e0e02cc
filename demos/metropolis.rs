//! Metropolis-Hastings sampling of a multimodal density.
//!
//! Small proposal steps explore slowly, large ones are mostly rejected.

use bayes_localize::estimators::metropolis::{multimodal_density, MetropolisHastings};
use rand::SeedableRng;

fn main() -> bayes_localize::Result<()> {
    let rng = rand::rngs::StdRng::seed_from_u64(7);
    for &sigma in [0.05, 1., 50.].iter() {
        let mut sampler = MetropolisHastings::new(multimodal_density, sigma, Box::new(rng.clone()))?;
        let chain = sampler.sample(-1., 1500)?;

        println!("sigma={} acceptance={:.3}", sigma, chain.acceptance_rate());
        let counts = chain.histogram(-4., 4., 20);
        for (b, n) in counts.iter().enumerate() {
            let lo = -4. + 0.4 * b as f64;
            println!("{:>5.1} {:>5} {}", lo, n, "#".repeat(n / 10));
        }
    }
    Ok(())
}
