use std::path::{Path, PathBuf};

use clap::Parser;

use raytracing_scene::scene::{
    scene_from_yaml_file, scene_to_yaml_file, scene_to_yaml_string, Primitive, Projection,
};

#[derive(Debug, clap::Parser)]
#[command(about = "Tools for YAML scene descriptions")]
struct CommandLineArguments {
    #[command(subcommand)]
    command: SceneCommand,
}

#[derive(Debug, clap::Subcommand)]
enum SceneCommand {
    #[command(about = "Load scene files and report the first error in each")]
    Validate {
        #[arg(required = true, help = "Scene files to check")]
        files: Vec<PathBuf>,
    },
    #[command(about = "Print a summary of a loaded scene")]
    Inspect {
        #[arg(help = "Scene file")]
        file: PathBuf,
        #[arg(long, action, help = "Machine-readable JSON summary")]
        json: bool,
    },
    #[command(about = "Load a scene and write it back out in canonical form")]
    Dump {
        #[arg(help = "Scene file")]
        file: PathBuf,
        #[arg(short, long, help = "Output filename (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli_args = CommandLineArguments::parse();

    match cli_args.command {
        SceneCommand::Validate { files } => validate(&files),
        SceneCommand::Inspect { file, json } => inspect(&file, json),
        SceneCommand::Dump { file, output } => dump(&file, output.as_deref()),
    }
}

fn validate(files: &[PathBuf]) {
    let mut failures = 0;
    for file in files {
        match scene_from_yaml_file(file) {
            Ok(scene) => println!(
                "{}: ok ({} primitives, {} materials)",
                file.display(),
                scene.primitives.len(),
                scene.materials.len()
            ),
            Err(err) => {
                eprintln!("{}: {}", file.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneSummary {
    iterations: u32,
    camera: &'static str,
    screen_size: [u32; 2],
    materials: Vec<String>,
    lights: usize,
    area_lights: usize,
    primitives: usize,
    shapes: usize,
    transforms: usize,
    collections: usize,
    bounded: usize,
    /// Minimum and maximum corner; absent when the scene is unbounded.
    bounds: Option<[[f32; 3]; 2]>,
}

fn inspect(file: &Path, json: bool) {
    let scene = match scene_from_yaml_file(file) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let mut shapes = 0;
    let mut transforms = 0;
    let mut collections = 0;
    let mut bounded = 0;
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Basic(_) => shapes += 1,
            Primitive::Transform(_) => transforms += 1,
            Primitive::Aggregate(_) => collections += 1,
            Primitive::Bounded(_) => bounded += 1,
        }
    }

    let bounds = scene.bounds();
    let summary = SceneSummary {
        iterations: scene.settings.iterations,
        camera: match scene.camera.projection {
            Projection::Perspective { .. } => "perspective",
            Projection::Orthographic { .. } => "orthographic",
        },
        screen_size: [scene.camera.screen_width, scene.camera.screen_height],
        materials: scene.material_names.clone(),
        lights: scene.lights.len(),
        area_lights: scene.area_lights.len(),
        primitives: scene.primitives.len(),
        shapes,
        transforms,
        collections,
        bounded,
        bounds: bounds
            .is_finite()
            .then(|| [bounds.minimum.into(), bounds.maximum.into()]),
    };

    if json {
        println!("{}", serde_json::to_string(&summary).unwrap());
        return;
    }

    println!("{}", file.display());
    println!("  iterations: {}", summary.iterations);
    println!(
        "  camera: {} {}x{}",
        summary.camera, summary.screen_size[0], summary.screen_size[1]
    );
    println!(
        "  materials ({}): {}",
        summary.materials.len(),
        summary.materials.join(", ")
    );
    println!(
        "  lights: {} declared, {} area",
        summary.lights, summary.area_lights
    );
    println!(
        "  primitives: {} ({} shapes, {} transformed, {} collections, {} bounded)",
        summary.primitives, summary.shapes, summary.transforms, summary.collections,
        summary.bounded
    );
    match summary.bounds {
        Some([minimum, maximum]) => println!("  bounds: {:?} .. {:?}", minimum, maximum),
        None => println!("  bounds: unbounded"),
    }
}

fn dump(file: &Path, output: Option<&Path>) {
    let scene = match scene_from_yaml_file(file) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let result = match output {
        Some(path) => scene_to_yaml_file(&scene, path),
        None => match scene_to_yaml_string(&scene) {
            Ok(text) => {
                print!("{}", text);
                Ok(())
            }
            Err(err) => Err(err),
        },
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
