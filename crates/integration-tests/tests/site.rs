//! Whole-site checks: conformance of every document, render determinism,
//! and the build round-trip through the filesystem.

use std::fs;

use uuid::Uuid;
use xyz_storefront::Site;
use xyz_storefront_core::{Page, StoreIdentity};
use xyz_storefront_integration_tests::render_default;

#[test]
fn every_page_conforms_to_the_contract() {
    let identity = StoreIdentity::default();
    for page in Page::ALL {
        let report = xyz_storefront_conformance::check(page, &identity, &render_default(page));
        assert!(report.is_conformant(), "{report}");
    }
}

#[test]
fn rendering_and_verifying_twice_gives_identical_results() {
    let identity = StoreIdentity::default();
    for page in Page::ALL {
        let first = render_default(page);
        let second = render_default(page);
        assert_eq!(first, second, "{page} render is not deterministic");

        let first_report = xyz_storefront_conformance::check(page, &identity, &first);
        let second_report = xyz_storefront_conformance::check(page, &identity, &second);
        assert_eq!(first_report, second_report);
    }
}

#[test]
fn built_site_round_trips_through_disk() {
    let out_dir = std::env::temp_dir().join(format!("xyz-storefront-{}", Uuid::new_v4()));
    let site = Site::default();

    site.write_to(&out_dir).expect("site builds");

    for page in Page::ALL {
        let markup = fs::read_to_string(out_dir.join(page.path())).expect("document was written");
        let report = xyz_storefront_conformance::check(page, site.identity(), &markup);
        assert!(report.is_conformant(), "{report}");
    }

    fs::remove_dir_all(&out_dir).expect("cleanup");
}

#[test]
fn custom_identity_flows_into_every_document() {
    let identity = StoreIdentity::new("Acme Ltd", 2024);
    let site = Site::new(identity.clone());

    for page in Page::ALL {
        let markup = site.render(page).expect("site renders");
        assert!(markup.contains("© 2024 Acme Ltd, all rights reserved"));
        let report = xyz_storefront_conformance::check(page, &identity, &markup);
        assert!(report.is_conformant(), "{report}");
    }
}

#[test]
fn pages_with_wrong_identity_fail_verification() {
    // The default documents are for XYZ Corporation; checking them against
    // a different identity must report title and footer mismatches.
    let other = StoreIdentity::new("Acme Ltd", 2024);
    let report = xyz_storefront_conformance::check(Page::Home, &other, &render_default(Page::Home));
    assert!(!report.is_conformant());
}
