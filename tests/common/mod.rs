#![allow(dead_code)]

pub const SITES: &str =
    "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Web/sites";

pub mod fixtures {
    use serde_json::{json, Map, Value};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Swagger 2.0 document with the given paths and lower-case verbs.
    pub fn swagger(version: &str, paths: &[(&str, &[&str])]) -> Value {
        let mut items = Map::new();
        for (template, verbs) in paths {
            let mut item = Map::new();
            for verb in *verbs {
                item.insert(verb.to_string(), json!({ "responses": {} }));
            }
            items.insert(template.to_string(), Value::Object(item));
        }
        json!({
            "swagger": "2.0",
            "info": { "title": "fixture", "version": version },
            "paths": items,
        })
    }

    /// A `<root>/<service>/<resource-type>/...` tree in a temp directory.
    pub struct SpecTree {
        dir: TempDir,
    }

    impl SpecTree {
        pub fn new() -> Self {
            SpecTree {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        /// Directory holding the services.
        pub fn root(&self) -> PathBuf {
            self.dir.path().join("top-level")
        }

        /// Scratch space outside the spec tree.
        pub fn scratch(&self) -> &Path {
            self.dir.path()
        }

        /// Write `doc` to `<root>/<relative>`, creating directories.
        pub fn write(&self, relative: &str, doc: &Value) -> PathBuf {
            let path = self.root().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
            path
        }

        pub fn mkdir(&self, relative: &str) -> PathBuf {
            let path = self.root().join(relative);
            fs::create_dir_all(&path).unwrap();
            path
        }
    }
}
