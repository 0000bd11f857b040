use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    dp, init_db, init_db_with_data, login, query_i64, query_string, register, setup_test_db,
    temp_out,
};

#[test]
fn test_quote_area_two_ids_mid_tier() {
    dp().args(["quote", "--mode", "area", "--qty", "200", "--area-ids", "2"])
        .assert()
        .success()
        .stdout(contains("300,00"))
        .stdout(contains("Daily (2 IDs, 150-250 unid.)"));
}

#[test]
fn test_quote_collection_rate() {
    dp().args(["quote", "--qty", "7", "--type", "c"])
        .assert()
        .success()
        .stdout(contains("5,60"))
        .stdout(contains("7 coletas × £0.80"));
}

#[test]
fn test_quote_negative_quantity_counts_as_zero() {
    dp().args(["quote", "--qty", "-5"])
        .assert()
        .success()
        .stdout(contains("0,00"))
        .stdout(contains("0 parcelas × £1.00"));
}

#[test]
fn test_quote_huge_quantity_is_capped() {
    dp().args(["quote", "--qty", "9223372036854775807"])
        .assert()
        .success()
        .stdout(contains("4.294.967.295,00"))
        .stdout(contains("4294967295 parcelas × £1.00"));
}

#[test]
fn test_quote_rejects_unknown_mode() {
    dp().args(["quote", "--mode", "weekly", "--qty", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid record mode"));
}

#[test]
fn test_init_seeds_admin() {
    let db_path = setup_test_db("init_seeds_admin");
    init_db(&db_path);

    assert_eq!(
        query_string(&db_path, "SELECT username FROM users WHERE role = 'ADMIN'"),
        "admin"
    );
    assert_eq!(
        query_i64(
            &db_path,
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'"
        ),
        1
    );
}

#[test]
fn test_individual_submission_creates_two_records() {
    let db_path = setup_test_db("two_records");
    init_db_with_data(&db_path);

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 3);
    assert_eq!(
        query_i64(
            &db_path,
            "SELECT value_pence FROM records WHERE individual_type = 'COLLECTION'"
        ),
        400
    );
    assert_eq!(
        query_i64(
            &db_path,
            "SELECT value_pence FROM records WHERE individual_type = 'PARCEL'"
        ),
        1000
    );
    assert_eq!(
        query_string(&db_path, "SELECT id_field FROM records WHERE mode = 'AREA'"),
        "R-10 + R-11"
    );
}

#[test]
fn test_add_requires_quantity() {
    let db_path = setup_test_db("add_requires_quantity");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    dp().args(["--db", &db_path, "add", "--route", "R-1", "--parcels", "0"])
        .assert()
        .failure()
        .stderr(contains("Nothing to save"));

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 0);
}

#[test]
fn test_add_rejects_out_of_range_quantity() {
    let db_path = setup_test_db("add_out_of_range_quantity");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    dp().args([
        "--db",
        &db_path,
        "add",
        "--route",
        "R-1",
        "--parcels",
        "5000000000",
    ])
    .assert()
    .failure()
    .stderr(contains("Quantity out of range"));

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 0);
}

#[test]
fn test_add_requires_login() {
    let db_path = setup_test_db("add_requires_login");
    init_db(&db_path);

    dp().args(["--db", &db_path, "add", "--route", "R-1", "--parcels", "3"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_add_with_photo_shares_it_across_records() {
    let db_path = setup_test_db("add_with_photo");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    let photo = temp_out("add_with_photo", "png");
    fs::write(&photo, [0x89, b'P', b'N', b'G']).expect("write photo");

    dp().args([
        "--db",
        &db_path,
        "add",
        "--route",
        "R-1",
        "--parcels",
        "2",
        "--collections",
        "1",
        "--photo",
        &photo,
    ])
    .assert()
    .success();

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM photos"), 2);
    assert_eq!(
        query_i64(&db_path, "SELECT COUNT(DISTINCT id) FROM photos"),
        1
    );
    assert!(
        query_string(&db_path, "SELECT data_url FROM photos LIMIT 1")
            .starts_with("data:image/png;base64,")
    );
}

#[test]
fn test_list_groups_by_month() {
    let db_path = setup_test_db("list_groups_by_month");
    init_db_with_data(&db_path);

    dp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("março de 2024"))
        .stdout(contains("INDIVIDUAL (PARCEL)"))
        .stdout(contains("INDIVIDUAL (COLLECTION)"))
        .stdout(contains("R-10 + R-11"))
        .stdout(contains("314,00"));
}

#[test]
fn test_list_other_user_requires_admin() {
    let db_path = setup_test_db("list_other_user");
    init_db_with_data(&db_path);

    dp().args(["--db", &db_path, "list", "--user", "admin"])
        .assert()
        .failure()
        .stderr(contains("administrator privileges"));
}

#[test]
fn test_stats_current_month() {
    let db_path = setup_test_db("stats_current_month");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    dp().args(["--db", &db_path, "add", "--route", "R-1", "--parcels", "12"])
        .assert()
        .success();
    dp().args(["--db", &db_path, "add", "--route", "R-1", "--collections", "10"])
        .assert()
        .success();

    dp().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Dias trabalhados  : 1"))
        .stdout(contains("20,00"));
}

#[test]
fn test_login_errors() {
    let db_path = setup_test_db("login_errors");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    dp().args(["--db", &db_path, "login", "-u", "ana", "-p", "nope"])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"));

    dp().args(["--db", &db_path, "login", "-u", "ghost", "-p", "pw"])
        .assert()
        .failure()
        .stderr(contains("User not found"));

    dp().args(["--db", &db_path, "login", "-u", "admin", "-p", "wrong", "--admin"])
        .assert()
        .failure()
        .stderr(contains("Invalid administrator credentials"));

    dp().args(["--db", &db_path, "login", "-u", "ana", "-p", "pw", "--admin"])
        .assert()
        .failure()
        .stderr(contains("administrator privileges"));
}

#[test]
fn test_register_rejects_duplicate_username() {
    let db_path = setup_test_db("register_duplicate");
    init_db(&db_path);
    register(&db_path, "Ana", "ana");

    dp().args([
        "--db", &db_path, "register", "--name", "Other", "-u", "ANA", "-p", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("Username already exists"));
}

#[test]
fn test_whoami_and_logout() {
    let db_path = setup_test_db("whoami_logout");
    init_db(&db_path);
    register(&db_path, "Ana Costa", "ana");

    dp().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Ana Costa (ana)"));

    dp().args(["--db", &db_path, "logout"]).assert().success();

    dp().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));
}

#[test]
fn test_del_own_record() {
    let db_path = setup_test_db("del_own_record");
    init_db_with_data(&db_path);

    let id = query_string(&db_path, "SELECT id FROM records WHERE mode = 'AREA'");

    dp().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 2);
}

#[test]
fn test_del_foreign_record_is_refused() {
    let db_path = setup_test_db("del_foreign_record");
    init_db_with_data(&db_path);
    register(&db_path, "Ana", "ana");

    let id = query_string(&db_path, "SELECT id FROM records WHERE mode = 'AREA'");

    dp().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Operation not allowed"));

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 3);
}

#[test]
fn test_del_unknown_record() {
    let db_path = setup_test_db("del_unknown_record");
    init_db_with_data(&db_path);

    dp().args(["--db", &db_path, "del", "does-not-exist", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Record not found"));
}

#[test]
fn test_admin_can_delete_any_record() {
    let db_path = setup_test_db("admin_delete");
    init_db_with_data(&db_path);
    login(&db_path, "admin", "EVRI01");

    let id = query_string(&db_path, "SELECT id FROM records WHERE mode = 'AREA'");

    dp().args(["--db", &db_path, "del", &id, "-y"])
        .assert()
        .success();

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM records"), 2);
}

#[test]
fn test_users_search_admin_only() {
    let db_path = setup_test_db("users_search");
    init_db(&db_path);
    register(&db_path, "Ana Costa", "ana");
    register(&db_path, "Bruno Reis", "bruno");

    dp().args(["--db", &db_path, "users"])
        .assert()
        .failure()
        .stderr(contains("administrator privileges"));

    login(&db_path, "admin", "EVRI01");

    dp().args(["--db", &db_path, "users", "--search", "cos"])
        .assert()
        .success()
        .stdout(contains("Ana Costa"))
        .stdout(contains("Bruno Reis").not())
        .stdout(contains("Administrador").not());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    assert_eq!(
        query_i64(&db_path, "SELECT COUNT(*) FROM log WHERE operation = 'add'"),
        3
    );

    dp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("register"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_compressed", "sqlite");
    let zip = temp_out("backup_compressed", "zip");

    dp().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success();

    assert!(fs::metadata(&zip).is_ok());
    assert!(fs::metadata(&dest).is_err());
}
