// crates/ugaloc-core/src/test_data.rs

//! Shared fixture for unit tests: a small dataset in the exact document
//! shape, covering three districts with uneven fan-out.

use crate::model::DefaultLocationDb;
use once_cell::sync::Lazy;

pub(crate) const SAMPLE_DATASET: &str = r#"{
  "districts": [
    {
      "name": "Kampala",
      "code": "012",
      "constituencies": [
        {
          "name": "Kampala Central Division",
          "code": "01",
          "subcounties": [
            {
              "name": "Central Division",
              "code": "01",
              "electoral_areas": [
                { "name": "Nakasero Ward", "code": "01" },
                { "name": "Kisenyi I", "code": "02" }
              ]
            }
          ]
        },
        {
          "name": "Kawempe Division North",
          "code": "02",
          "subcounties": [
            {
              "name": "Kawempe I",
              "code": "01",
              "electoral_areas": [
                { "name": "Mpererwe Ward", "code": "01" }
              ]
            }
          ]
        }
      ]
    },
    {
      "name": "Mbarara",
      "code": "027",
      "constituencies": [
        {
          "name": "Mbarara City North",
          "code": "01",
          "subcounties": [
            {
              "name": "Kakoba",
              "code": "01",
              "electoral_areas": [
                { "name": "Kakoba Central Ward", "code": "01" },
                { "name": "Lugazi Ward", "code": "02" }
              ]
            },
            {
              "name": "Nyamitanga",
              "code": "02",
              "electoral_areas": [
                { "name": "Nyamitanga Ward", "code": "01" }
              ]
            }
          ]
        },
        {
          "name": "Mbarara City South",
          "code": "02",
          "subcounties": [
            {
              "name": "Kamukuzi",
              "code": "01",
              "electoral_areas": [
                { "name": "Kamukuzi Ward", "code": "01" },
                { "name": "Ruti Ward", "code": "02" }
              ]
            }
          ]
        }
      ]
    },
    {
      "name": "Gulu",
      "code": "004",
      "constituencies": [
        {
          "name": "Gulu East",
          "code": "01",
          "subcounties": [
            {
              "name": "Laroo Division",
              "code": "01",
              "electoral_areas": [
                { "name": "Agwee Ward", "code": "01" },
                { "name": "Pece Prison Ward", "code": "02" }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

static SAMPLE_DB: Lazy<DefaultLocationDb> = Lazy::new(|| {
    DefaultLocationDb::from_json_slice(SAMPLE_DATASET.as_bytes())
        .expect("sample dataset is well-formed")
});

pub(crate) fn sample_db() -> &'static DefaultLocationDb {
    &SAMPLE_DB
}
