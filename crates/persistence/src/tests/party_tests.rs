// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_employer, create_test_worker, seeded_store};
use crate::{Persistence, PersistenceError};
use shiftflow_domain::FlexPool;

#[test]
fn test_create_worker_assigns_id_and_round_trips() {
    let mut store = Persistence::new_in_memory().unwrap();
    let saved = store
        .create_worker(&create_test_worker("Mila Jansen", "mila@example.com"))
        .unwrap();
    assert!(saved.id > 0);

    let fetched = store.get_worker(saved.id).unwrap();
    assert_eq!(fetched, saved);
    assert_eq!(fetched.name, "Mila Jansen");
    // Fresh workers carry default scores.
    assert!((fetched.rating - 5.0).abs() < f64::EPSILON);
    assert_eq!(fetched.rating_count, 0);
    assert!((fetched.punctuality - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_duplicate_worker_email_is_rejected() {
    let mut store = Persistence::new_in_memory().unwrap();
    store
        .create_worker(&create_test_worker("Mila Jansen", "mila@example.com"))
        .unwrap();

    let result = store.create_worker(&create_test_worker("Other Person", "mila@example.com"));
    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_find_worker_by_email() {
    let (mut store, worker, _, _) = seeded_store();

    let found = store.find_worker_by_email("mila@example.com").unwrap();
    assert_eq!(found.map(|w| w.id), Some(worker.id));
    assert!(store.find_worker_by_email("nobody@example.com").unwrap().is_none());
}

#[test]
fn test_update_worker_persists_score_changes() {
    let (mut store, mut worker, _, _) = seeded_store();

    worker.rating = 4.2;
    worker.rating_count = 3;
    worker.shifts.push(17);
    store.update_worker(&worker).unwrap();

    let fetched = store.get_worker(worker.id).unwrap();
    assert!((fetched.rating - 4.2).abs() < f64::EPSILON);
    assert_eq!(fetched.rating_count, 3);
    assert_eq!(fetched.shifts, vec![17]);
}

#[test]
fn test_update_missing_worker_fails() {
    let mut store = Persistence::new_in_memory().unwrap();
    let mut ghost = create_test_worker("Ghost", "ghost@example.com");
    ghost.id = 999;
    assert_eq!(
        store.update_worker(&ghost),
        Err(PersistenceError::WorkerNotFound(999))
    );
}

#[test]
fn test_get_missing_worker_fails() {
    let mut store = Persistence::new_in_memory().unwrap();
    assert!(matches!(
        store.get_worker(42),
        Err(PersistenceError::WorkerNotFound(42))
    ));
}

#[test]
fn test_create_employer_assigns_id_and_round_trips() {
    let mut store = Persistence::new_in_memory().unwrap();
    let saved = store
        .create_employer(&create_test_employer("Cafe Noord", "noord@example.com"))
        .unwrap();
    assert!(saved.id > 0);

    let fetched = store.get_employer(saved.id).unwrap();
    assert_eq!(fetched, saved);

    let found = store.find_employer_by_email("noord@example.com").unwrap();
    assert_eq!(found.map(|e| e.id), Some(saved.id));
}

#[test]
fn test_update_employer_persists_rating() {
    let (mut store, _, mut employer, posting) = seeded_store();

    employer.rating = 4.0;
    employer.rating_count = 2;
    employer.postings.push(posting.id);
    store.update_employer(&employer).unwrap();

    let fetched = store.get_employer(employer.id).unwrap();
    assert!((fetched.rating - 4.0).abs() < f64::EPSILON);
    assert_eq!(fetched.postings, vec![posting.id]);
}

#[test]
fn test_flexpool_round_trip_and_listing() {
    let (mut store, worker, employer, posting) = seeded_store();

    let mut pool = FlexPool::new(employer.id, "Weekend crew".to_string());
    pool.workers.push(worker.id);
    let saved = store.create_flexpool(&pool).unwrap();
    assert!(saved.id > 0);

    let other = store
        .create_flexpool(&FlexPool::new(employer.id, "Evening crew".to_string()))
        .unwrap();

    let fetched = store.get_flexpool(saved.id).unwrap();
    assert_eq!(fetched.workers, vec![worker.id]);

    let pools = store.list_flexpools_for_employer(employer.id).unwrap();
    assert_eq!(
        pools.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![saved.id, other.id]
    );

    // Attach the posting and persist it.
    let mut updated = fetched;
    updated.postings.push(posting.id);
    store.update_flexpool(&updated).unwrap();
    assert_eq!(store.get_flexpool(saved.id).unwrap().postings, vec![posting.id]);
}

#[test]
fn test_update_missing_flexpool_fails() {
    let (mut store, _, employer, _) = seeded_store();
    let mut ghost = FlexPool::new(employer.id, "Ghost pool".to_string());
    ghost.id = 555;
    assert_eq!(
        store.update_flexpool(&ghost),
        Err(PersistenceError::FlexPoolNotFound(555))
    );
}
