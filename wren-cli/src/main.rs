//! Wren layout inspector
//!
//! A headless harness for the single-line text-control layout engine:
//! loads a widget scene (or one of the built-in demos), runs a layout
//! request, and dumps the settled box tree plus the pending effects,
//! either colored for terminals or as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use wren_box::{BoxId, BoxInit, BoxRole, BoxTree, EdgeSizes, Point, Rect, WidgetTreeBuilder};
use wren_layout::{
    GeometricHitTester, LayoutConstraints, LayoutContext, LayoutEffect, LayoutOutcome,
    SimpleBlockLayout, SingleLineLayout, layout_widget, node_at_point,
};
use wren_style::{BoxStyle, Direction, StyleSet};

#[derive(Debug, Parser)]
#[command(name = "wren", about = "Headless layout inspector for text-control widgets")]
struct Cli {
    /// Path to a widget scene (JSON). Omit to use a built-in demo.
    scene: Option<PathBuf>,

    /// Built-in demo scene: undecorated, decorated, or clamped.
    #[arg(long, default_value = "decorated")]
    demo: String,

    /// Emit the settled tree as JSON instead of a colored dump.
    #[arg(long)]
    json: bool,

    /// Resolve a hit test at "x,y" (control coordinates) after layout.
    #[arg(long)]
    hit: Option<String>,
}

/// Edge widths in the JSON scene: `[top, right, bottom, left]`.
type SceneEdges = [i32; 4];

/// One box of the widget scene.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneBox {
    /// Padding edge widths.
    #[serde(default)]
    padding: SceneEdges,
    /// Border edge widths.
    #[serde(default)]
    border: SceneEdges,
    /// Declared logical width, e.g. for the spin button.
    #[serde(default)]
    width: Option<i32>,
    /// Measured content height for leaf boxes (what the text measurer
    /// would report).
    #[serde(default)]
    content_height: Option<i32>,
}

/// The control's available content box and line height.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneConstraints {
    width: i32,
    height: i32,
    line_height: i32,
}

/// A widget variant to lay out.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Scene {
    constraints: Option<SceneConstraints>,
    /// Inline direction of the container: "ltr" (default) or "rtl".
    direction: Option<SceneDirection>,
    control: Option<SceneBox>,
    container: Option<SceneBox>,
    inner_block: Option<SceneBox>,
    inner_text: Option<SceneBox>,
    spin_button: Option<SceneBox>,
    placeholder: Option<SceneBox>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SceneDirection {
    Ltr,
    Rtl,
}

fn edges(edge_widths: SceneEdges) -> EdgeSizes {
    EdgeSizes {
        top: edge_widths[0],
        right: edge_widths[1],
        bottom: edge_widths[2],
        left: edge_widths[3],
    }
}

fn box_init(scene_box: SceneBox) -> BoxInit {
    BoxInit {
        padding: edges(scene_box.padding),
        border: edges(scene_box.border),
    }
}

fn demo_scene(name: &str) -> Result<Scene> {
    let scene = match name {
        "undecorated" => Scene {
            constraints: Some(SceneConstraints {
                width: 100,
                height: 40,
                line_height: 40,
            }),
            inner_text: Some(SceneBox {
                content_height: Some(30),
                ..SceneBox::default()
            }),
            ..Scene::default()
        },
        "decorated" => Scene {
            constraints: Some(SceneConstraints {
                width: 100,
                height: 30,
                line_height: 30,
            }),
            control: Some(SceneBox {
                padding: [2, 2, 2, 2],
                border: [1, 1, 1, 1],
                ..SceneBox::default()
            }),
            container: Some(SceneBox::default()),
            inner_block: Some(SceneBox::default()),
            inner_text: Some(SceneBox {
                content_height: Some(24),
                ..SceneBox::default()
            }),
            spin_button: Some(SceneBox {
                width: Some(16),
                ..SceneBox::default()
            }),
            placeholder: Some(SceneBox::default()),
            ..Scene::default()
        },
        "clamped" => Scene {
            constraints: Some(SceneConstraints {
                width: 100,
                height: 40,
                line_height: 40,
            }),
            inner_text: Some(SceneBox {
                content_height: Some(60),
                ..SceneBox::default()
            }),
            ..Scene::default()
        },
        _ => bail!("unknown demo scene '{name}' (try undecorated, decorated, clamped)"),
    };
    Ok(scene)
}

/// A scene assembled into something the engine can lay out.
struct Widget {
    tree: BoxTree,
    styles: StyleSet,
    engine: SimpleBlockLayout,
    state: SingleLineLayout,
    constraints: LayoutConstraints,
}

fn assemble(scene: &Scene) -> Result<Widget> {
    let mut builder = WidgetTreeBuilder::new();
    let roles = [
        (BoxRole::Control, scene.control),
        (BoxRole::Container, scene.container),
        (BoxRole::InnerBlock, scene.inner_block),
        (BoxRole::InnerText, scene.inner_text),
        (BoxRole::SpinButton, scene.spin_button),
        (BoxRole::Placeholder, scene.placeholder),
    ];
    for (role, scene_box) in roles {
        if let Some(scene_box) = scene_box {
            builder
                .set(role, box_init(scene_box))
                .with_context(|| format!("adding the {role} box"))?;
        }
    }
    let tree = builder.finish().context("assembling the widget tree")?;

    let mut styles = StyleSet::new();
    if let Some(SceneDirection::Rtl) = scene.direction
        && let Some(container) = tree.container()
    {
        styles.set(
            container,
            BoxStyle {
                direction: Direction::Rtl,
                ..BoxStyle::INITIAL
            },
        );
    }
    if let Some(scene_box) = scene.spin_button
        && let Some(width) = scene_box.width
        && let Some(spin_button) = tree.spin_button()
    {
        styles.set(
            spin_button,
            BoxStyle {
                logical_width: Some(width),
                ..BoxStyle::INITIAL
            },
        );
    }

    let mut engine = SimpleBlockLayout::new();
    if let Some(scene_box) = scene.inner_text
        && let Some(content_height) = scene_box.content_height
    {
        engine.set_content_height(tree.inner_text(), content_height);
    }

    let constraints = scene
        .constraints
        .context("scene is missing its constraints")?;
    Ok(Widget {
        tree,
        styles,
        engine,
        state: SingleLineLayout::new(),
        constraints: LayoutConstraints {
            available_logical_width: constraints.width,
            available_logical_height: constraints.height,
            line_height: constraints.line_height,
        },
    })
}

/// One box of the JSON snapshot.
#[derive(Debug, Serialize)]
struct BoxSnapshot {
    role: BoxRole,
    frame: Rect,
    children: Vec<BoxSnapshot>,
}

fn snapshot(tree: &BoxTree, id: BoxId) -> BoxSnapshot {
    BoxSnapshot {
        role: tree.node(id).role(),
        frame: tree.node(id).metrics.frame,
        children: tree
            .children(id)
            .iter()
            .map(|&child| snapshot(tree, child))
            .collect(),
    }
}

/// The full JSON report: settled tree plus the outcome.
#[derive(Debug, Serialize)]
struct Report {
    passes: u8,
    effects: Vec<LayoutEffect>,
    root: BoxSnapshot,
}

fn print_tree(tree: &BoxTree, id: BoxId, depth: usize) {
    let node = tree.node(id);
    let frame = node.metrics.frame;
    let label = node.role().to_string();
    let colored = match node.role() {
        BoxRole::Control => label.cyan().to_string(),
        BoxRole::Container => label.blue().to_string(),
        BoxRole::InnerBlock => label.magenta().to_string(),
        BoxRole::InnerText => label.green().to_string(),
        BoxRole::SpinButton => label.yellow().to_string(),
        BoxRole::Placeholder => label.bright_black().to_string(),
    };
    println!(
        "{:indent$}{colored} frame=({}, {}, {}×{})",
        "",
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        indent = depth * 2,
    );
    for &child in tree.children(id) {
        print_tree(tree, child, depth + 1);
    }
}

fn print_effects(outcome: &LayoutOutcome) {
    println!(
        "\n{} pass(es), {} pending effect(s)",
        outcome.passes,
        outcome.effects.len()
    );
    for effect in &outcome.effects {
        println!("  {effect:?}");
    }
}

fn parse_point(raw: &str) -> Result<Point> {
    let (x, y) = raw
        .split_once(',')
        .context("expected the hit point as x,y")?;
    Ok(Point::new(
        x.trim().parse().context("hit point x")?,
        y.trim().parse().context("hit point y")?,
    ))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scene = match &cli.scene {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading scene {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing scene {}", path.display()))?
        }
        None => demo_scene(&cli.demo)?,
    };

    let mut widget = assemble(&scene)?;
    let mut cx = LayoutContext {
        tree: &mut widget.tree,
        styles: &widget.styles,
        constraints: widget.constraints,
    };
    let outcome = layout_widget(&mut widget.state, &mut cx, &mut widget.engine);

    if cli.json {
        let report = Report {
            passes: outcome.passes,
            effects: outcome.effects.clone(),
            root: snapshot(&widget.tree, widget.tree.control()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_tree(&widget.tree, widget.tree.control(), 0);
        print_effects(&outcome);
    }

    if let Some(raw) = &cli.hit {
        let point = parse_point(raw)?;
        match node_at_point(&widget.tree, &GeometricHitTester, point) {
            Some(hit) => println!(
                "\nhit {} at local ({}, {})",
                widget.tree.node(hit.target).role(),
                hit.local_point.x,
                hit.local_point.y,
            ),
            None => println!("\nhit nothing at ({}, {})", point.x, point.y),
        }
    }

    Ok(())
}
