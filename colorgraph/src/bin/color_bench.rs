use colorgraph::algorithms::backtrack::{color_bounded, SearchLimits, SearchOutcome};
use colorgraph::algorithms::greedy::color_greedy;
use colorgraph::Graph;
use std::time::Instant;

// Grid with one diagonal per cell: 3-colorable, max degree 6
fn build_tri_grid(w: usize, h: usize) -> Graph {
    let mut g = Graph::new();
    let mut ids = Vec::with_capacity(w * h);
    for j in 0..h { for i in 0..w { ids.push(g.add_vertex(i as f32 * 20.0, j as f32 * 20.0).unwrap()); } }
    for j in 0..h { for i in 0..w {
        let v = ids[j * w + i];
        if i + 1 < w { g.add_edge(v, ids[j * w + i + 1]).unwrap(); }
        if j + 1 < h { g.add_edge(v, ids[(j + 1) * w + i]).unwrap(); }
        if i + 1 < w && j + 1 < h { g.add_edge(v, ids[(j + 1) * w + i + 1]).unwrap(); }
    } }
    g
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut w = 12usize;
    let mut h = 12usize;
    let mut colors = 3u32;
    let mut steps: Option<u64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--w=") { if let Ok(v)=val.parse() { w=v; } }
        else if let Some(val)=a.strip_prefix("--h=") { if let Ok(v)=val.parse() { h=v; } }
        else if let Some(val)=a.strip_prefix("--colors=") { if let Ok(v)=val.parse() { colors=v; } }
        else if let Some(val)=a.strip_prefix("--max-steps=") { if let Ok(v)=val.parse() { steps=Some(v); } }
    }

    let g = build_tri_grid(w, h);
    let t0 = Instant::now();
    let adj = g.adjacency();
    let adj_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let t1 = Instant::now();
    let greedy = color_greedy(&adj);
    let greedy_ms = t1.elapsed().as_secs_f64() * 1000.0;

    let t2 = Instant::now();
    let exact = color_bounded(&adj, colors, SearchLimits { max_steps: steps });
    let exact_ms = t2.elapsed().as_secs_f64() * 1000.0;
    let exact_desc = match &exact {
        SearchOutcome::Colored(c) => format!("colored distinct={}", c.distinct_count()),
        SearchOutcome::Exhausted { max_colors } => format!("exhausted max_colors={}", max_colors),
        SearchOutcome::BudgetExceeded { steps, .. } => format!("aborted steps={}", steps),
    };
    println!("vertices={} edges={} adj_ms={:.3} greedy_ms={:.3} greedy_distinct={} exact_ms={:.3} exact={}",
        g.vertex_count(), g.edge_count(), adj_ms, greedy_ms, greedy.distinct_count(), exact_ms, exact_desc);
    if !greedy.is_valid_for(&adj) { eprintln!("FAIL: greedy produced a conflicting coloring"); std::process::exit(1); }
}
