use colorgraph::algorithms::adjacency::AdjacencyList;
use colorgraph::algorithms::backtrack::{color_bounded, SearchLimits, SearchOutcome};
use colorgraph::algorithms::greedy::color_greedy;
use colorgraph::limits::MAX_VERTICES;
use colorgraph::palette::{aliases, palette_color, PALETTE, PALETTE_LEN};
use colorgraph::Coloring;

fn triangle() -> AdjacencyList {
    AdjacencyList::from_pairs(3, &[(0, 1), (1, 2), (2, 0)])
}

fn complete(n: u32) -> AdjacencyList {
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            pairs.push((a, b));
        }
    }
    AdjacencyList::from_pairs(n as usize, &pairs)
}

#[test]
fn empty_graph() {
    let adj = AdjacencyList::from_pairs(0, &[]);
    let c = color_greedy(&adj);
    assert!(c.is_empty());
    assert_eq!(c.distinct_count(), 0);
    // zero vertices is a success, not a failure
    assert_eq!(
        color_bounded(&adj, 0, SearchLimits::UNBOUNDED),
        SearchOutcome::Colored(Coloring::default())
    );
}

#[test]
fn single_edge() {
    let adj = AdjacencyList::from_pairs(2, &[(0, 1)]);
    let c = color_greedy(&adj);
    assert_eq!(c.as_slice(), &[0, 1]);
    assert_eq!(c.distinct_count(), 2);
}

#[test]
fn triangle_greedy_and_bounded() {
    let adj = triangle();
    assert_eq!(color_greedy(&adj).as_slice(), &[0, 1, 2]);
    assert_eq!(
        color_bounded(&adj, 2, SearchLimits::UNBOUNDED),
        SearchOutcome::Exhausted { max_colors: 2 }
    );
    let three = color_bounded(&adj, 3, SearchLimits::UNBOUNDED)
        .into_coloring()
        .expect("triangle is 3-colorable");
    assert_eq!(three.as_slice(), &[0, 1, 2]);
    assert_eq!(three.distinct_count(), 3);
}

#[test]
fn four_cycle_greedy_is_optimal() {
    let adj = AdjacencyList::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let c = color_greedy(&adj);
    assert_eq!(c.as_slice(), &[0, 1, 0, 1]);
    assert_eq!(c.distinct_count(), 2);
}

#[test]
fn star_uses_two_colors() {
    let k = 7u32;
    let pairs: Vec<_> = (1..=k).map(|leaf| (0, leaf)).collect();
    let adj = AdjacencyList::from_pairs(k as usize + 1, &pairs);
    let c = color_greedy(&adj);
    assert_eq!(c.get(0), Some(0));
    assert!((1..=k).all(|leaf| c.get(leaf) == Some(1)));
    assert_eq!(c.distinct_count(), 2);
}

#[test]
fn greedy_depends_on_id_order() {
    // Triangle 0-2-3 with pendant 1; exact search never does worse than first-fit.
    let adj = AdjacencyList::from_pairs(4, &[(0, 2), (2, 3), (3, 1), (0, 3)]);
    let greedy = color_greedy(&adj);
    assert!(greedy.is_valid_for(&adj));
    let exact = color_bounded(&adj, 3, SearchLimits::UNBOUNDED).into_coloring().unwrap();
    assert!(exact.is_valid_for(&adj));
    assert!(exact.distinct_count() <= greedy.distinct_count());
}

#[test]
fn bounded_zero_colors_fails_on_nonempty_graph() {
    let adj = AdjacencyList::from_pairs(1, &[]);
    assert_eq!(
        color_bounded(&adj, 0, SearchLimits::UNBOUNDED),
        SearchOutcome::Exhausted { max_colors: 0 }
    );
    let one = color_bounded(&adj, 1, SearchLimits::UNBOUNDED);
    assert_eq!(one.coloring().map(|c| c.as_slice().to_vec()), Some(vec![0]));
}

#[test]
fn bounded_backtracks_past_first_choice() {
    // Odd wheel: rim 1..=5 is a 5-cycle and hub 0 joins every rim vertex,
    // so 3 colors fail only after revisiting earlier rim choices.
    let mut pairs: Vec<(u32, u32)> = (1..=5).map(|i| (0, i)).collect();
    pairs.extend([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    let adj = AdjacencyList::from_pairs(6, &pairs);
    assert!(!color_bounded(&adj, 3, SearchLimits::UNBOUNDED).is_colored());
    let c = color_bounded(&adj, 4, SearchLimits::UNBOUNDED).into_coloring().unwrap();
    assert!(c.is_valid_for(&adj));
    assert!(c.as_slice().iter().all(|&x| x < 4));
}

#[test]
fn budget_stops_search_with_distinct_outcome() {
    let adj = complete(8);
    let out = color_bounded(&adj, 7, SearchLimits { max_steps: Some(50) });
    match out {
        SearchOutcome::BudgetExceeded { max_colors, steps } => {
            assert_eq!(max_colors, 7);
            assert_eq!(steps, 50);
        }
        other => panic!("expected budget abort, got {:?}", other),
    }
    // same problem without a budget is proven impossible
    assert_eq!(
        color_bounded(&adj, 7, SearchLimits::UNBOUNDED),
        SearchOutcome::Exhausted { max_colors: 7 }
    );
}

fn cycle(n: u32) -> AdjacencyList {
    let pairs: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    AdjacencyList::from_pairs(n as usize, &pairs)
}

// A search as deep as the vertex cap has to fit in a small thread stack.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn bounded_search_on_max_length_path() {
    let n = MAX_VERTICES as u32;
    let out = on_small_stack(move || {
        let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        color_bounded(&AdjacencyList::from_pairs(n as usize, &pairs), 2, SearchLimits::UNBOUNDED)
    });
    let colors = out.into_coloring().unwrap().into_vec();
    assert_eq!(colors.len(), MAX_VERTICES);
    assert!(colors.iter().enumerate().all(|(i, &c)| c == (i % 2) as u32));
}

#[test]
fn bounded_search_backs_out_of_long_odd_cycle() {
    let n = MAX_VERTICES as u32 - 1;
    let (full, capped) = on_small_stack(move || {
        let adj = cycle(n);
        (
            color_bounded(&adj, 2, SearchLimits::UNBOUNDED),
            color_bounded(&adj, 2, SearchLimits { max_steps: Some(n as u64 + 5) }),
        )
    });
    assert_eq!(full, SearchOutcome::Exhausted { max_colors: 2 });
    // each start color forces the rest of the chain, so the budget runs out
    // on the second pass
    assert_eq!(
        capped,
        SearchOutcome::BudgetExceeded { max_colors: 2, steps: n as u64 + 5 }
    );
    assert!(on_small_stack(move || color_bounded(&cycle(n), 3, SearchLimits::UNBOUNDED)).is_colored());
}

#[test]
fn recomputing_is_bit_identical() {
    let adj = AdjacencyList::from_pairs(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (2, 3)]);
    assert_eq!(color_greedy(&adj), color_greedy(&adj));
    assert_eq!(
        color_bounded(&adj, 3, SearchLimits::UNBOUNDED),
        color_bounded(&adj, 3, SearchLimits::UNBOUNDED)
    );
}

#[test]
fn conflicts_counts_shared_colors_and_short_colorings() {
    let adj = triangle();
    assert_eq!(Coloring::new(vec![0, 0, 1]).conflicts(&adj), 1);
    assert_eq!(Coloring::new(vec![0, 0, 0]).conflicts(&adj), 3);
    assert!(!Coloring::new(vec![0, 1]).is_valid_for(&adj));
}

#[test]
fn palette_wraps_after_six_entries() {
    assert_eq!(PALETTE_LEN, 6);
    for i in 0..PALETTE_LEN as u32 {
        assert_eq!(palette_color(i), PALETTE[i as usize]);
        assert_eq!(palette_color(i + 6), palette_color(i));
    }
    assert!(aliases(0, 6));
    assert!(!aliases(0, 1));
}

#[test]
fn valid_coloring_can_alias_on_screen() {
    // K7 needs 7 colors; 0 and 6 are adjacent yet share a display color.
    let adj = complete(7);
    let c = color_greedy(&adj);
    assert!(c.is_valid_for(&adj));
    assert_eq!(c.distinct_count(), 7);
    let shown = c.display_colors();
    assert_eq!(shown[0], shown[6]);
    assert_eq!(c.rgba_bytes().len(), 7 * 4);
}
