use tracing::{debug, info};

use crate::{
    class::{ClassDescriptor, ProblemClass},
    error::Result,
    instance::ProblemInstance,
    rng::RandomNumberGenerator,
};

use super::{GenerationOptions, Manifest, OutputLayout, Split};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// The class and seed recorded in `meta.txt`.
    pub descriptor: ClassDescriptor,
    /// One manifest per split, in [`Split::ALL`] order.
    pub manifests: Vec<(Split, Manifest)>,
}

impl GenerationReport {
    pub fn manifest(&self, split: Split) -> Option<&Manifest> {
        self.manifests
            .iter()
            .find(|(s, _)| *s == split)
            .map(|(_, manifest)| manifest)
    }
}

/// Drives one generation run: folder setup, class selection, instance files
/// and manifests.
#[derive(Debug, Clone)]
pub struct GenerationLauncher {
    options: GenerationOptions,
}

impl GenerationLauncher {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Runs the generation to completion.
    ///
    /// The master generator is seeded from the configured seed, or from a
    /// fresh entropy seed that is then recorded. Its first fork samples the
    /// class; every instance then gets its own fork, training before testing.
    /// A split's manifest is written only after all of its instance files.
    ///
    /// # Errors
    ///
    /// Any configuration or file-system failure aborts the run; files written
    /// up to that point are left in place but the manifests will not list a
    /// complete split.
    pub fn run(&self) -> Result<GenerationReport> {
        let layout = OutputLayout::new(self.options.get_folder());
        layout.prepare()?;

        let seed = self
            .options
            .get_seed()
            .unwrap_or_else(RandomNumberGenerator::entropy_seed);
        let mut master = RandomNumberGenerator::from_seed(seed);

        let mut class_rng = master.fork();
        let class = match self.options.get_class() {
            Some(class) => class,
            None => ProblemClass::sample(self.options.get_bounds(), &mut class_rng)?,
        };

        let descriptor = ClassDescriptor::new(class, seed);
        descriptor.write_file(&layout.meta_path())?;
        info!(
            seed,
            class = %class,
            eval_budget = class.eval_budget(),
            folder = %layout.root().display(),
            "selected problem class"
        );

        let mut manifests = Vec::with_capacity(Split::ALL.len());
        for split in Split::ALL {
            let count = self.options.get_count(split);
            let manifest = generate_split(&layout, split, count, &class, &mut master)?;
            manifest.write_file(&layout.manifest_path(split))?;
            info!(split = %split, count, "split complete");
            manifests.push((split, manifest));
        }

        Ok(GenerationReport {
            descriptor,
            manifests,
        })
    }
}

fn generate_split(
    layout: &OutputLayout,
    split: Split,
    count: usize,
    class: &ProblemClass,
    master: &mut RandomNumberGenerator,
) -> Result<Manifest> {
    let mut entries = Vec::with_capacity(count);

    for index in 0..count {
        let mut rng = master.fork();
        let instance = ProblemInstance::generate(class, &mut rng)?;

        let relative = OutputLayout::relative_instance_path(split, index);
        instance.write_file(&layout.resolve(&relative))?;
        debug!(
            file = %relative,
            rows = instance.row_count(),
            width = instance.row_width(),
            "wrote instance"
        );
        entries.push(relative);
    }

    Ok(Manifest::new(entries))
}
