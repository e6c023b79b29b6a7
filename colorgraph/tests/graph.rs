use colorgraph::algorithms::picking::PickMode;
use colorgraph::error::GraphError;
use colorgraph::Graph;

#[test]
fn vertices_get_dense_increasing_ids() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(50.0, 0.0).unwrap();
    let c = g.add_vertex(0.0, 50.0).unwrap();
    assert_eq!((a, b, c), (0, 1, 2));
    assert_eq!(g.vertex_count(), 3);
    let (ids, pos) = g.get_vertex_arrays();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(pos, vec![0.0, 0.0, 50.0, 0.0, 0.0, 50.0]);
}

#[test]
fn add_edge_rejects_unknown_and_self_loop_without_mutating() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(30.0, 0.0).unwrap();
    let ver = g.version();
    assert_eq!(g.add_edge(a, 7), Err(GraphError::UnknownVertex { id: 7 }));
    assert_eq!(g.add_edge(9, b), Err(GraphError::UnknownVertex { id: 9 }));
    assert_eq!(g.add_edge(a, a), Err(GraphError::SelfLoop { id: a }));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.version(), ver, "state mutated on error");
    assert_eq!(g.add_edge(a, b), Ok(0));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut g = Graph::new();
    let err = g.add_vertex(f32::NAN, 0.0).unwrap_err();
    assert_eq!(err.code(), "non_finite");
    let err = g.add_vertex(0.0, 1.0e30).unwrap_err();
    assert_eq!(err.code(), "out_of_range");
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn adjacency_collapses_parallel_edges_and_keeps_isolated_vertices() {
    let mut g = Graph::new();
    for i in 0..4 {
        g.add_vertex(i as f32 * 40.0, 0.0).unwrap();
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 0).unwrap();
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    assert_eq!(g.edge_count(), 4);
    let adj = g.adjacency();
    assert_eq!(adj.len(), 4);
    assert_eq!(adj.neighbors(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(adj.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(adj.degree(3), 0, "isolated vertex must still have an entry");
    assert!(adj.is_symmetric());
    assert_eq!(adj.edge_pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

#[test]
fn remove_last_vertex_drops_incident_edges() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(30.0, 0.0).unwrap();
    let c = g.add_vertex(60.0, 0.0).unwrap();
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    g.add_edge(c, a).unwrap();
    assert_eq!(g.remove_last_vertex(), Some(c));
    assert_eq!(g.vertex_count(), 2);
    let ea = g.get_edge_arrays();
    assert_eq!(ea.endpoints, vec![a, b]);
    assert_eq!(g.adjacency().len(), 2);
    g.clear();
    assert_eq!(g.remove_last_vertex(), None);
}

#[test]
fn clear_empties_graph_and_bumps_version() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(30.0, 0.0).unwrap();
    g.add_edge(a, b).unwrap();
    let ver = g.version();
    g.clear();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.version() > ver);
    assert!(g.adjacency().is_empty());
    assert_eq!(g.add_vertex(5.0, 5.0), Ok(0), "ids restart after clear");
}

#[test]
fn pick_nearest_versus_first_in_creation_order() {
    let mut g = Graph::new();
    let far = g.add_vertex(0.0, 0.0).unwrap();
    let near = g.add_vertex(8.0, 0.0).unwrap();
    let p = g.pick(7.0, 0.0, 10.0, PickMode::Nearest).unwrap();
    assert_eq!(p.id, near);
    assert!((p.dist - 1.0).abs() < 1e-6);
    let p = g.pick(7.0, 0.0, 10.0, PickMode::FirstInCreationOrder).unwrap();
    assert_eq!(p.id, far);
    assert!(g.pick(100.0, 100.0, 10.0, PickMode::Nearest).is_none());
    // boundary is inclusive
    assert_eq!(g.pick(10.0, 0.0, 10.0, PickMode::FirstInCreationOrder).map(|p| p.id), Some(far));
}
