//! Unit tests for cm-graph.
//!
//! All tests use hand-built maps; no files are read.

#[cfg(test)]
mod helpers {
    use cm_core::{Point, PointId};

    use crate::Map;

    /// `A(0,0)`, `B(3,0)`, `C(3,4)`, connected pairwise.
    pub fn triangle() -> (Map, [PointId; 3]) {
        let mut map = Map::new();
        let a = map.add_point("A", Point::new(0, 0));
        let b = map.add_point("B", Point::new(3, 0));
        let c = map.add_point("C", Point::new(3, 4));
        map.add_connection(a, b).unwrap();
        map.add_connection(b, c).unwrap();
        map.add_connection(a, c).unwrap();
        (map, [a, b, c])
    }

    /// Five points, six connections:
    ///
    /// ```text
    ///   C(0,3) ─────────── T(4,3)
    ///     │               ╱ │
    ///     │        B(2,2)   │   B–T, A–T
    ///     │          │    ╱
    ///   S(0,0) ── A(2,0)
    /// ```
    ///
    /// Edges: S–A, A–B, S–C, C–T, B–T, A–T.
    pub fn kite() -> (Map, [PointId; 5]) {
        let mut map = Map::new();
        let s = map.add_point("S", Point::new(0, 0));
        let a = map.add_point("A", Point::new(2, 0));
        let b = map.add_point("B", Point::new(2, 2));
        let c = map.add_point("C", Point::new(0, 3));
        let t = map.add_point("T", Point::new(4, 3));
        for (x, y) in [(s, a), (a, b), (s, c), (c, t), (b, t), (a, t)] {
            map.add_connection(x, y).unwrap();
        }
        (map, [s, a, b, c, t])
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}

// ── Point store ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use cm_core::{Point, PointId};

    use crate::{Map, PointRef, PointStore};

    #[test]
    fn auto_ids_are_sequential() {
        let mut map = Map::new();
        assert_eq!(map.add_point("a", Point::new(0, 0)), PointId(0));
        assert_eq!(map.add_point("b", Point::new(1, 0)), PointId(1));
        assert_eq!(map.size(), 2);
    }

    #[test]
    fn explicit_id_bumps_counter() {
        let mut map = Map::new();
        assert_eq!(map.add_point_with_id(PointId(10), "x", Point::new(0, 0)), PointId(10));
        assert_eq!(map.add_point("y", Point::new(1, 1)), PointId(11));
        // A lower explicit id does not move the counter backwards.
        assert_eq!(map.add_point_with_id(PointId(3), "z", Point::new(2, 2)), PointId(3));
        assert_eq!(map.add_point("w", Point::new(3, 3)), PointId(12));
    }

    #[test]
    fn explicit_id_equal_to_counter_bumps() {
        let mut map = Map::new();
        map.add_point_with_id(PointId(0), "first", Point::new(0, 0));
        assert_eq!(map.add_point("second", Point::new(1, 0)), PointId(1));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut map = Map::new();
        let a = map.add_point("dup", Point::new(0, 0));
        assert_eq!(map.add_point("dup", Point::new(9, 9)), PointId::INVALID);
        assert_eq!(map.size(), 1);
        assert_eq!(map.value_of(a).unwrap(), Point::new(0, 0));
        // The rejected insert did not burn an id.
        assert_eq!(map.add_point("other", Point::new(1, 1)), PointId(1));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut map = Map::new();
        map.add_point_with_id(PointId(5), "a", Point::new(0, 0));
        assert_eq!(map.add_point_with_id(PointId(5), "b", Point::new(1, 1)), PointId::INVALID);
        assert!(!map.contains("b"));
    }

    #[test]
    fn sentinel_id_rejected() {
        let mut store = PointStore::new();
        assert_eq!(store.insert_with_id(PointId::INVALID, "x", Point::new(0, 0)), PointId::INVALID);
        assert!(store.is_empty());
    }

    #[test]
    fn bijection_holds() {
        let (map, _) = super::helpers::kite();
        for id in map.ids() {
            let name = map.name_of(id).unwrap();
            assert_eq!(map.id_of(name).unwrap(), id);
            assert_eq!(map.name_of(map.id_of(name).unwrap()).unwrap(), name);
        }
    }

    #[test]
    fn removal_cascades() {
        let (mut map, [s, a, _, _, t]) = super::helpers::kite();
        assert!(map.remove_point("A"));

        assert!(!map.contains(a));
        assert!(!map.contains("A"));
        for id in map.ids() {
            assert!(!map.neighbors(id).unwrap().contains(&a), "{id} still lists A");
        }
        assert!(!map.has_connection(s, a));
        assert!(map.has_connection("C", t));
        assert_eq!(map.size(), 4);
    }

    #[test]
    fn remove_missing_is_noop() {
        let (mut map, _) = super::helpers::triangle();
        assert!(!map.remove_point("nope"));
        assert!(!map.remove_point(PointId(99)));
        assert_eq!(map.size(), 3);
    }

    #[test]
    fn removed_name_can_be_reused() {
        let (mut map, [a, ..]) = super::helpers::triangle();
        map.remove_point(a);
        let again = map.add_point("A", Point::new(7, 7));
        assert!(again.is_valid());
        assert_ne!(again, a);
        assert_eq!(map.id_of("A").unwrap(), again);
    }

    #[test]
    fn clear_resets_ids() {
        let (mut map, _) = super::helpers::triangle();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.size(), 0);
        assert_eq!(map.add_point("fresh", Point::new(0, 0)), PointId(0));
    }

    #[test]
    fn resolve_point_ref() {
        let (map, [a, ..]) = super::helpers::triangle();
        assert_eq!(map.store().resolve(PointRef::Name("A")), Some(a));
        assert_eq!(map.store().resolve(PointRef::Id(a)), Some(a));
        assert_eq!(map.store().resolve(PointRef::from("Z")), None);
        let owned = String::from("B");
        assert!(map.contains(&owned));
    }
}

// ── Connections ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod connections {
    use cm_core::{Point, PointId};

    use crate::{GraphError, Map};

    #[test]
    fn symmetric_insert_and_remove() {
        let mut map = Map::new();
        let a = map.add_point("a", Point::new(0, 0));
        let b = map.add_point("b", Point::new(1, 0));

        map.add_connection(a, b).unwrap();
        assert!(map.has_connection(a, b));
        assert!(map.has_connection(b, a));
        assert_eq!(map.connection_count(), 1);

        map.remove_connection("b", "a").unwrap();
        assert!(!map.has_connection(a, b));
        assert!(!map.has_connection(b, a));
        assert_eq!(map.connection_count(), 0);
    }

    #[test]
    fn no_self_loop() {
        let mut map = Map::new();
        let a = map.add_point("a", Point::new(0, 0));
        map.add_connection(a, a).unwrap();
        assert!(!map.has_connection(a, a));
        assert!(map.neighbors(a).unwrap().is_empty());
    }

    #[test]
    fn missing_endpoint_is_not_found() {
        let mut map = Map::new();
        let a = map.add_point("a", Point::new(0, 0));
        assert_eq!(
            map.add_connection(a, PointId(42)),
            Err(GraphError::PointNotFound(PointId(42)))
        );
        assert_eq!(
            map.add_connection("ghost", a),
            Err(GraphError::NameNotFound("ghost".into()))
        );
        assert!(map.neighbors(a).unwrap().is_empty());
    }

    #[test]
    fn removing_absent_connection_is_noop() {
        let (mut map, [a, b, _]) = super::helpers::triangle();
        map.remove_connection(a, b).unwrap();
        map.remove_connection(a, b).unwrap();
        assert!(!map.has_connection(a, b));
    }

    #[test]
    fn has_connection_with_missing_point_is_false() {
        let (map, [a, ..]) = super::helpers::triangle();
        assert!(!map.has_connection(a, PointId(77)));
        assert!(!map.has_connection("A", "nowhere"));
    }

    #[test]
    fn duplicate_connection_counts_once() {
        let (mut map, [a, b, _]) = super::helpers::triangle();
        map.add_connection(a, b).unwrap();
        map.add_connection(b, a).unwrap();
        assert_eq!(map.connection_count(), 3);
    }
}

// ── Lookups and formatting ────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use cm_core::{Path, Point, PointId, TravelMode};

    use crate::GraphError;

    #[test]
    fn name_and_id_not_found() {
        let (map, _) = super::helpers::triangle();
        assert_eq!(map.name_of(PointId(9)), Err(GraphError::PointNotFound(PointId(9))));
        assert_eq!(map.id_of("Q"), Err(GraphError::NameNotFound("Q".into())));
    }

    #[test]
    fn value_get_and_set() {
        let (mut map, [_, b, _]) = super::helpers::triangle();
        assert_eq!(map.value_of("B").unwrap(), Point::new(3, 0));
        map.set_value(b, Point::new(-1, 5)).unwrap();
        assert_eq!(map.value_of(b).unwrap(), Point::new(-1, 5));
        assert!(map.set_value("missing", Point::new(0, 0)).is_err());
    }

    #[test]
    fn describe_empty_is_empty_string() {
        let (map, _) = super::helpers::triangle();
        assert_eq!(map.describe(&[], " -> ").unwrap(), "");
    }

    #[test]
    fn describe_joins_names() {
        let (map, [a, b, c]) = super::helpers::triangle();
        assert_eq!(map.describe(&[a], " -> ").unwrap(), "A");
        assert_eq!(map.describe(&[a, b, c], " -> ").unwrap(), "A -> B -> C");
        assert_eq!(map.describe(&[c, a], ", ").unwrap(), "C, A");
    }

    #[test]
    fn describe_unknown_id_fails() {
        let (map, [a, ..]) = super::helpers::triangle();
        assert!(matches!(
            map.describe(&[a, PointId(50)], " -> "),
            Err(GraphError::PointNotFound(PointId(50)))
        ));
    }

    #[test]
    fn query_by_name() {
        let (map, [a, _, c]) = super::helpers::triangle();
        let q = map.query("A", "C", TravelMode::Car).unwrap();
        assert_eq!(q.endpoints(), (a, c));
        assert_eq!(q.mode(), TravelMode::Car);
        assert!(map.query("A", "nope", TravelMode::Car).is_err());
    }

    #[test]
    fn validity_predicate() {
        let (mut map, [a, b, c]) = super::helpers::triangle();
        assert!(!map.is_valid(&Path::unreachable(TravelMode::Car)));
        assert!(map.is_valid(&Path::new(TravelMode::Car, 0.0, vec![a])));
        assert!(map.is_valid(&Path::new(TravelMode::Car, 7.0, vec![a, b, c])));

        map.remove_connection(b, c).unwrap();
        assert!(!map.is_valid(&Path::new(TravelMode::Car, 7.0, vec![a, b, c])));
        assert!(!map.is_valid(&Path::new(TravelMode::Car, 0.0, vec![PointId(40)])));
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolve {
    use cm_core::{CarQuery, Path, PedestrianQuery, Point, PointId, Query, TravelMode};

    use super::helpers::assert_close;
    use crate::{DijkstraResolver, Resolver};

    #[test]
    fn triangle_pedestrian_takes_direct_edge() {
        let (map, [a, _, c]) = super::helpers::triangle();
        let path = map.find_path(&Query::new(a, c, TravelMode::Pedestrian));
        assert_eq!(path.mode(), TravelMode::Pedestrian);
        assert_close(path.distance(), 5.0);
        assert_eq!(path.points(), &[a, c]);
    }

    #[test]
    fn triangle_car_distance_seven() {
        let (map, [a, b, c]) = super::helpers::triangle();
        let path = map.find_path(&Query::new(a, c, TravelMode::Car));
        assert_eq!(path.mode(), TravelMode::Car);
        assert_close(path.distance(), 7.0);
        // Direct and via-B tie at 7; either sequence is acceptable.
        assert!(path.points() == [a, c] || path.points() == [a, b, c]);
        assert!(map.is_valid(&path));
    }

    #[test]
    fn kite_optimal_distances() {
        let (map, [s, _, _, _, t]) = super::helpers::kite();

        let walk = map.find_path(&Query::new(s, t, TravelMode::Pedestrian));
        assert_close(walk.distance(), 2.0 + 13f64.sqrt()); // S–A–T

        // Every monotone route S→T is 7 on the grid; only the distance is fixed.
        let drive = map.find_path(&Query::new(s, t, TravelMode::Car));
        assert_close(drive.distance(), 7.0);
        assert_eq!(drive.from(), Some(s));
        assert_eq!(drive.to(), Some(t));
        assert!(map.is_valid(&drive));
    }

    #[test]
    fn kite_detour_after_removing_edge() {
        let (mut map, [s, a, b, c, t]) = super::helpers::kite();
        map.remove_connection(s, a).unwrap();

        let walk = map.find_path(&Query::new(s, b, TravelMode::Pedestrian));
        assert_close(walk.distance(), 7.0 + 5f64.sqrt());
        assert_eq!(walk.points(), &[s, c, t, b]);

        let drive = map.find_path(&Query::new(s, b, TravelMode::Car));
        assert_close(drive.distance(), 10.0);
        assert_eq!(drive.points(), &[s, c, t, b]);
    }

    #[test]
    fn unreachable_component_gives_empty_path() {
        let (mut map, [a, ..]) = super::helpers::triangle();
        let island = map.add_point("island", Point::new(100, 100));
        let other = map.add_point("other", Point::new(101, 100));
        map.add_connection(island, other).unwrap();

        for mode in TravelMode::ALL {
            let path = map.find_path(&Query::new(a, island, mode));
            assert!(path.is_empty());
            assert_eq!(path.mode(), mode);
            assert!(path.distance().is_infinite());
            assert!(!map.is_valid(&path));
        }
    }

    #[test]
    fn missing_endpoint_gives_empty_path() {
        let (map, [a, ..]) = super::helpers::triangle();
        assert!(map.find_path(&Query::new(a, PointId(99), TravelMode::Car)).is_empty());
        assert!(map.find_path(&Query::new(PointId(99), a, TravelMode::Car)).is_empty());
    }

    #[test]
    fn start_equals_destination() {
        let (map, [_, b, _]) = super::helpers::triangle();
        let path = map.find_path(&Query::new(b, b, TravelMode::Pedestrian));
        assert_eq!(path.points(), &[b]);
        assert_eq!(path.distance(), 0.0);
        assert!(map.is_valid(&path));
    }

    #[test]
    fn toggled_query_uses_other_metric() {
        let (map, [s, _, b, _, _]) = super::helpers::kite();
        let mut q = Query::new(s, b, TravelMode::Pedestrian);
        let walk = map.find_path(&q);
        q.toggle_mode();
        let drive = map.find_path(&q);
        assert_close(walk.distance(), 4.0); // S–A–B, axis-aligned
        assert_close(drive.distance(), 4.0);
        assert_eq!(drive.mode(), TravelMode::Car);
    }

    #[test]
    fn concrete_views() {
        let (map, [a, _, c]) = super::helpers::triangle();
        let walk = map.find_pedestrian_path(PedestrianQuery::new(a, c));
        assert_close(walk.distance, 5.0);
        assert_eq!(walk.points, vec![a, c]);

        let drive = map.find_car_path(CarQuery::new(a, c));
        assert_close(drive.distance, 7.0);
        assert!(map.is_valid(&Path::Car(drive)));
    }

    #[test]
    fn concrete_views_agree_with_unified() {
        let (mut map, [s, _, b, _, t]) = super::helpers::kite();
        let island = map.add_point("island", Point::new(40, 40));

        for (from, to) in [(s, t), (s, b), (t, s), (s, island), (s, PointId(99))] {
            let walk = map.find_pedestrian_path(PedestrianQuery::new(from, to));
            let unified = map.find_path(&Query::new(from, to, TravelMode::Pedestrian));
            assert_eq!(Path::Pedestrian(walk), unified);

            let drive = map.find_car_path(CarQuery::new(from, to));
            let unified = map.find_path(&Query::new(from, to, TravelMode::Car));
            assert_eq!(drive.distance, unified.distance());
            assert_eq!(drive.is_empty(), unified.is_empty());
        }

        let lost = map.find_car_path(CarQuery::new(s, island));
        assert!(lost.is_empty());
        assert!(lost.distance.is_infinite());
    }

    #[test]
    fn tree_answers_many_destinations() {
        let (map, [s, a, b, c, t]) = super::helpers::kite();
        let tree = map.shortest_paths(s, TravelMode::Pedestrian);
        assert_eq!(tree.start(), s);
        assert_close(tree.distance_to(s).unwrap(), 0.0);
        assert_close(tree.distance_to(a).unwrap(), 2.0);
        assert_close(tree.distance_to(b).unwrap(), 4.0);
        assert_close(tree.distance_to(c).unwrap(), 3.0);
        assert!(tree.is_reachable(t));
        assert!(!tree.is_reachable(PointId(1234)));
        assert_eq!(tree.route_to(b).unwrap().1, vec![s, a, b]);
    }

    #[test]
    fn tree_from_missing_start_reaches_nothing() {
        let (map, [a, ..]) = super::helpers::triangle();
        let tree = DijkstraResolver.shortest_paths(map.store(), PointId(77), TravelMode::Car.metric());
        assert!(!tree.is_reachable(a));
        assert!(tree.path_to(a, TravelMode::Car).is_empty());
    }

    #[test]
    fn batch_preserves_order() {
        let (map, [a, b, c]) = super::helpers::triangle();
        let queries = [
            Query::new(a, c, TravelMode::Pedestrian),
            Query::new(b, a, TravelMode::Car),
            Query::new(a, c, TravelMode::Car),
        ];
        let paths = map.find_paths(&queries);
        assert_eq!(paths.len(), 3);
        for (q, p) in queries.iter().zip(&paths) {
            assert_eq!(p.mode(), q.mode());
            assert_eq!(p.from(), Some(q.from()));
            assert_eq!(p.to(), Some(q.to()));
        }
        assert_close(paths[1].distance(), 3.0);
    }

    #[test]
    fn custom_resolver_is_used() {
        struct NothingReachable;
        impl Resolver for NothingReachable {
            fn shortest_paths(
                &self,
                store: &crate::PointStore,
                _start: PointId,
                metric: cm_core::Metric,
            ) -> crate::ShortestPathTree {
                // Start from a point that does not exist.
                DijkstraResolver.shortest_paths(store, PointId::INVALID, metric)
            }
        }

        let (map, [a, _, c]) = super::helpers::triangle();
        let path = map.find_path_with(&NothingReachable, &Query::new(a, c, TravelMode::Car));
        assert!(path.is_empty());
    }
}

// ── Randomised cross-check ────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use cm_core::{Point, PointId, Query, TravelMode};

    use crate::Map;

    /// All-pairs shortest distances by Floyd–Warshall, indexed by position
    /// in `ids`.
    fn floyd_warshall(map: &Map, ids: &[PointId], mode: TravelMode) -> Vec<Vec<f64>> {
        let n = ids.len();
        let metric = mode.metric();
        let mut d = vec![vec![f64::INFINITY; n]; n];
        for i in 0..n {
            d[i][i] = 0.0;
            for j in 0..n {
                if map.has_connection(ids[i], ids[j]) {
                    d[i][j] = metric(map.value_of(ids[i]).unwrap(), map.value_of(ids[j]).unwrap());
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let via = d[i][k] + d[k][j];
                    if via < d[i][j] {
                        d[i][j] = via;
                    }
                }
            }
        }
        d
    }

    fn random_map(rng: &mut SmallRng, n: usize, density: f64) -> (Map, Vec<PointId>) {
        let mut map = Map::new();
        let ids: Vec<PointId> = (0..n)
            .map(|i| {
                let p = Point::new(rng.gen_range(-50..50), rng.gen_range(-50..50));
                map.add_point(&format!("p{i}"), p)
            })
            .collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(density) {
                    map.add_connection(ids[i], ids[j]).unwrap();
                }
            }
        }
        (map, ids)
    }

    #[test]
    fn dijkstra_matches_floyd_warshall() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let (map, ids) = random_map(&mut rng, 12, 0.2);

            for mode in TravelMode::ALL {
                let expected = floyd_warshall(&map, &ids, mode);
                let metric = mode.metric();

                for (i, &from) in ids.iter().enumerate() {
                    for (j, &to) in ids.iter().enumerate() {
                        let path = map.find_path(&Query::new(from, to, mode));

                        if expected[i][j].is_infinite() {
                            assert!(path.is_empty(), "{from}->{to} should be unreachable");
                            continue;
                        }

                        assert!((path.distance() - expected[i][j]).abs() < 1e-9);
                        assert!(map.is_valid(&path));
                        assert_eq!(path.from(), Some(from));
                        assert_eq!(path.to(), Some(to));

                        // The reported distance is the sum of its own legs.
                        let legs: f64 = path
                            .points()
                            .windows(2)
                            .map(|w| metric(map.value_of(w[0]).unwrap(), map.value_of(w[1]).unwrap()))
                            .sum();
                        assert!((legs - path.distance()).abs() < 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn symmetry_survives_random_edits() {
        let mut rng = SmallRng::seed_from_u64(7);
        let (mut map, ids) = random_map(&mut rng, 15, 0.4);

        for _ in 0..200 {
            let a = ids[rng.gen_range(0..ids.len())];
            let b = ids[rng.gen_range(0..ids.len())];
            if rng.gen_bool(0.5) {
                map.add_connection(a, b).unwrap();
            } else {
                map.remove_connection(a, b).unwrap();
            }
        }

        for &a in &ids {
            assert!(!map.has_connection(a, a));
            for &b in &ids {
                assert_eq!(map.has_connection(a, b), map.has_connection(b, a));
            }
        }
    }
}
