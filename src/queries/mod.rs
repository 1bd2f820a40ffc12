//! Store operations over a `DatabaseBackend`.
//!
//! - `entity` maps stored rows to entity shapes
//! - `crud` creates, reads, updates and deletes any entity
//! - `links` maintains the junction relations and builds expanded reads

mod crud;
mod entity;
mod links;

pub use crud::{create, delete, find, get, list, update, MAX_LIST_LIMIT};
pub use entity::{Entity, LinkSet};
pub use links::{
    link, link_magnet_msite, link_magnet_mpart, linked, linked_ids, magnet_with_mparts,
    magnet_with_msites, mpart_with_magnets, msite_with_magnets, unlink, unlink_magnet_msite,
    unlink_magnet_mpart,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{MAGNET_MSITES, MSITE_MAGNETS};
    use crate::db::DbError;
    use crate::models::*;
    use crate::test_utils::*;
    use rstest::rstest;

    #[test]
    fn test_create_assigns_fresh_keys() {
        let db = migrated_db();

        let a: MSite = create(&db, site("M9")).unwrap();
        let b: MSite = create(&db, site("M10")).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.base, site("M9"));
        assert_eq!(get::<MSite>(&db, 2).unwrap(), b);
    }

    #[test]
    fn test_keys_are_not_reused_after_delete() {
        let db = migrated_db();
        let first: Magnet = create(&db, magnet("M9")).unwrap();
        delete::<Magnet>(&db, first.id).unwrap();

        let second: Magnet = create(&db, magnet("M10")).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_sequences_are_per_relation() {
        let db = migrated_db();
        create::<Magnet>(&db, magnet("M9")).unwrap();
        create::<Magnet>(&db, magnet("M10")).unwrap();

        let s: MSite = create(&db, site("S1")).unwrap();
        assert_eq!(s.id, 1);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_keys() {
        let db = migrated_db();

        let results: Vec<Result<MSite, DbError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let db = &db;
                    scope.spawn(move || create::<MSite>(db, site(&format!("S{}", i))))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut ids: Vec<i64> = results.iter().filter_map(|r| r.as_ref().ok()).map(|s| s.id).collect();
        let acknowledged = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert!(acknowledged > 0);
        assert_eq!(ids.len(), acknowledged);
        assert_eq!(list::<MSite>(&db, MAX_LIST_LIMIT).unwrap().len(), acknowledged);
    }

    #[test]
    fn test_material_round_trip_keeps_every_field() {
        let db = migrated_db();
        let mut input = copper();
        input.alpha = None;
        input.reference = Some("handbook p.12".to_string());

        let created: Material = create(&db, input.clone()).unwrap();
        let fetched = get::<Material>(&db, created.id).unwrap();

        assert_eq!(fetched.base, input);
    }

    #[test]
    fn test_material_omitted_optionals_stored_as_zero() {
        let db = migrated_db();
        let payload = serde_json::json!({
            "name": "Cu",
            "Tref": 293.0,
            "VolumicMass": 9000.0,
            "SpecificHeat": 380.0,
            "ThermalConductivity": 360.0,
            "MagnetPermeability": 1.0,
            "Young": 117e9,
            "Poisson": 0.33,
            "CoefDilatation": 18e-6
        });
        let input: MaterialCreate = serde_json::from_value(payload).unwrap();

        let created: Material = create(&db, input).unwrap();
        let stored = get::<Material>(&db, created.id).unwrap();

        assert_eq!(stored.base.alpha, Some(0.0));
        assert_eq!(stored.base.electrical_conductivity, Some(0.0));
    }

    #[test]
    fn test_mpart_with_unknown_material_rejected() {
        let db = migrated_db();

        let err = create::<MPart>(&db, part("H1", Some(99))).unwrap_err();

        assert!(matches!(
            err,
            DbError::ForeignKeyViolation { ref target, value: 99, .. } if target == "material"
        ));
        assert!(list::<MPart>(&db, 100).unwrap().is_empty());
    }

    #[test]
    fn test_mpart_without_material_allowed() {
        let db = migrated_db();
        let created: MPart = create(&db, part("H1", None)).unwrap();
        assert_eq!(created.base.material_id, None);
    }

    #[test]
    fn test_mrecord_with_unknown_site_rejected() {
        let db = migrated_db();
        let err = create::<MRecord>(&db, record("ramp", Some(5))).unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[test]
    fn test_get_missing_returns_not_found() {
        let db = migrated_db();
        let err = get::<Magnet>(&db, 42).unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42, .. }));
        assert!(find::<Magnet>(&db, 42).unwrap().is_none());
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(10, 3)]
    fn test_list_respects_limit(#[case] limit: u32, #[case] expected: usize) {
        let db = migrated_db();
        for name in ["M1", "M2", "M3"] {
            create::<Magnet>(&db, magnet(name)).unwrap();
        }

        let magnets = list::<Magnet>(&db, limit).unwrap();

        assert_eq!(magnets.len(), expected);
        assert_eq!(magnets[0].base.name, "M1");
    }

    #[test]
    fn test_concurrent_identical_links_store_one_row() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();
        let p: MPart = create(&db, part("H1", None)).unwrap();
        let pair = MPartMagnetLink {
            magnet_id: m.id,
            mpart_id: p.id,
        };

        let results: Vec<Result<(), DbError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let db = &db;
                    scope.spawn(move || link_magnet_mpart(db, pair))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let accepted = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(accepted, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, DbError::UniqueViolation { .. })));
        assert_eq!(magnet_with_mparts(&db, m.id).unwrap().mparts, vec![p]);
    }

    #[test]
    fn test_duplicate_link_rejected() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();
        let p: MPart = create(&db, part("H1", None)).unwrap();
        let pair = MPartMagnetLink {
            magnet_id: m.id,
            mpart_id: p.id,
        };

        link_magnet_mpart(&db, pair).unwrap();
        let err = link_magnet_mpart(&db, pair).unwrap_err();

        assert!(matches!(
            err,
            DbError::UniqueViolation { ref relation, ref key } if relation == "mpart_magnet_link" && *key == vec![m.id, p.id]
        ));
    }

    #[test]
    fn test_link_to_missing_entity_rejected() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();

        let err = link_magnet_msite(
            &db,
            MagnetMSiteLink {
                magnet_id: m.id,
                msite_id: 7,
            },
        )
        .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { value: 7, .. }));
    }

    #[test]
    fn test_unlink_reports_whether_removed() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();
        let s: MSite = create(&db, site("S1")).unwrap();
        let pair = MagnetMSiteLink {
            magnet_id: m.id,
            msite_id: s.id,
        };

        link_magnet_msite(&db, pair).unwrap();
        assert!(unlink_magnet_msite(&db, pair).unwrap());
        assert!(!unlink_magnet_msite(&db, pair).unwrap());
        assert!(linked_ids(&db, &MAGNET_MSITES, m.id).unwrap().is_empty());
    }

    #[test]
    fn test_update_with_empty_lists_clears_links() {
        let db = migrated_db();
        let a: Magnet = create(&db, magnet("A")).unwrap();
        let s1: MSite = create(&db, site("S1")).unwrap();
        link_magnet_msite(
            &db,
            MagnetMSiteLink {
                magnet_id: a.id,
                msite_id: s1.id,
            },
        )
        .unwrap();
        assert_eq!(magnet_with_msites(&db, a.id).unwrap().msites.len(), 1);

        let payload = MagnetUpdate {
            base: a.base.clone(),
            msites: Vec::new(),
            mparts: Vec::new(),
        };
        update::<Magnet>(&db, a.id, payload).unwrap();

        assert!(magnet_with_msites(&db, a.id).unwrap().msites.is_empty());
        assert!(msite_with_magnets(&db, s1.id).unwrap().magnets.is_empty());
    }

    #[test]
    fn test_update_replaces_link_set() {
        let db = migrated_db();
        let s: MSite = create(&db, site("S1")).unwrap();
        let m1: Magnet = create(&db, magnet("M1")).unwrap();
        let m2: Magnet = create(&db, magnet("M2")).unwrap();
        let m3: Magnet = create(&db, magnet("M3")).unwrap();
        for m in [&m1, &m2] {
            link_magnet_msite(
                &db,
                MagnetMSiteLink {
                    magnet_id: m.id,
                    msite_id: s.id,
                },
            )
            .unwrap();
        }

        let mut renamed = s.base.clone();
        renamed.status = "decommissioned".to_string();
        let payload = MSiteUpdate {
            base: renamed,
            magnets: vec![m2.clone(), m3.clone()],
        };
        let updated = update::<MSite>(&db, s.id, payload).unwrap();

        assert_eq!(updated.base.status, "decommissioned");
        assert_eq!(
            linked_ids(&db, &MSITE_MAGNETS, s.id).unwrap(),
            vec![m2.id, m3.id]
        );
        assert_eq!(get::<MSite>(&db, s.id).unwrap(), updated);
    }

    #[test]
    fn test_update_with_unknown_linked_id_changes_nothing() {
        let db = migrated_db();
        let p: MPart = create(&db, part("H1", None)).unwrap();
        let mut ghost = create::<Magnet>(&db, magnet("M1")).unwrap();
        ghost.id = 50;

        let mut base = p.base.clone();
        base.name = "H2".to_string();
        let err = update::<MPart>(
            &db,
            p.id,
            MPartUpdate {
                base,
                magnets: vec![ghost],
            },
        )
        .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { value: 50, .. }));
        assert_eq!(get::<MPart>(&db, p.id).unwrap().base.name, "H1");
    }

    #[test]
    fn test_update_missing_entity_not_found() {
        let db = migrated_db();
        let err = update::<Material>(&db, 3, copper()).unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 3, .. }));
        assert!(list::<Material>(&db, 10).unwrap().is_empty());
    }

    #[test]
    fn test_expanded_read_returns_current_links() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();
        let h1: MPart = create(&db, part("H1", None)).unwrap();
        let h2: MPart = create(&db, part("H2", None)).unwrap();
        let h3: MPart = create(&db, part("H3", None)).unwrap();
        for p in [&h1, &h2, &h3] {
            link_magnet_mpart(
                &db,
                MPartMagnetLink {
                    magnet_id: m.id,
                    mpart_id: p.id,
                },
            )
            .unwrap();
        }
        unlink_magnet_mpart(
            &db,
            MPartMagnetLink {
                magnet_id: m.id,
                mpart_id: h2.id,
            },
        )
        .unwrap();

        let expanded = magnet_with_mparts(&db, m.id).unwrap();

        let mut names: Vec<_> = expanded.mparts.iter().map(|p| p.base.name.clone()).collect();
        names.sort();
        assert_eq!(expanded.magnet, m);
        assert_eq!(names, vec!["H1", "H3"]);
        assert_eq!(
            mpart_with_magnets(&db, h1.id).unwrap().magnets,
            vec![m.clone()]
        );
    }

    #[test]
    fn test_delete_removes_junction_rows() {
        let db = migrated_db();
        let m: Magnet = create(&db, magnet("M9")).unwrap();
        let s: MSite = create(&db, site("S1")).unwrap();
        link_magnet_msite(
            &db,
            MagnetMSiteLink {
                magnet_id: m.id,
                msite_id: s.id,
            },
        )
        .unwrap();

        let removed = delete::<Magnet>(&db, m.id).unwrap();

        assert_eq!(removed, m);
        assert!(find::<Magnet>(&db, m.id).unwrap().is_none());
        assert!(msite_with_magnets(&db, s.id).unwrap().magnets.is_empty());
    }

    #[test]
    fn test_delete_referenced_material_rejected() {
        let db = migrated_db();
        let cu: Material = create(&db, copper()).unwrap();
        let p: MPart = create(&db, part("H1", Some(cu.id))).unwrap();

        let err = delete::<Material>(&db, cu.id).unwrap_err();
        assert!(matches!(
            err,
            DbError::StillReferenced { ref referenced_by, .. } if referenced_by == "mpart"
        ));

        delete::<MPart>(&db, p.id).unwrap();
        delete::<Material>(&db, cu.id).unwrap();
    }

    #[test]
    fn test_delete_site_with_records_rejected() {
        let db = migrated_db();
        let s: MSite = create(&db, site("S1")).unwrap();
        create::<MRecord>(&db, record("ramp", Some(s.id))).unwrap();

        let err = delete::<MSite>(&db, s.id).unwrap_err();
        assert!(matches!(err, DbError::StillReferenced { .. }));
    }

    #[test]
    fn test_delete_missing_entity_not_found() {
        let db = migrated_db();
        assert!(matches!(
            delete::<MRecord>(&db, 1).unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
