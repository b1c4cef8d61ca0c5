use xcolor::core::event_bus::{create_event_channel, SolveEvent};
use xcolor::graph::ConstraintGraph;
use xcolor::solver::solve_with_events;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== XColor Engine (backtracking + AC-3) ===\n");

    let mut graph = ConstraintGraph::new();
    let edges = [
        ("0", "1"),
        ("0", "2"),
        ("0", "3"),
        ("0", "4"),
        ("1", "2"),
        ("1", "3"),
        ("2", "3"),
        ("2", "4"),
        ("3", "4"),
    ];
    for (u, v) in edges {
        graph.add_edge(u, v).expect("Failed to build demo graph");
    }
    println!(
        "[OK] Graph built ({} vertices, {} edges)",
        graph.vertex_count(),
        edges.len()
    );

    let palette = vec![
        "violet".to_string(),
        "coral".to_string(),
        "cyan".to_string(),
        "limegreen".to_string(),
    ];
    println!("[OK] Palette: {:?}\n", palette);

    let (sender, receiver) = create_event_channel();
    let result = solve_with_events(&graph, &palette, sender);

    println!("=== Search trace ===");
    for event in receiver.try_iter() {
        match event {
            SolveEvent::Assigned { vertex, color, .. } => {
                println!("  assign   {} -> {}", vertex, color);
            }
            SolveEvent::Unassigned { vertex, color, .. } => {
                println!("  unassign {} (was {})", vertex, color);
            }
            SolveEvent::SolveCompleted { .. } | SolveEvent::SolveInfeasible { .. } => {}
        }
    }

    match result {
        Ok(assignment) => {
            println!("\n=== Coloring found ===");
            for (vertex, color) in assignment.iter() {
                println!("  {} = {}", vertex, color);
            }
        }
        Err(error) => {
            println!("\n=== No solution: {} ===", error);
        }
    }
}
