//! Integration tests for gantry-core through its public API.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use gantry_core::{
    application::ApplicationError,
    domain::{expected_file_count, FsEntry},
    prelude::*,
};

/// Renders `<id>:<field names>` so tests can see which model a file was for.
struct FieldListRenderer;

impl TemplateRenderer for FieldListRenderer {
    fn render(
        &self,
        template: &TemplateSource,
        context: &GenerationContext<'_>,
    ) -> GantryResult<Vec<u8>> {
        let names: Vec<&str> = match context {
            GenerationContext::Project { models, .. } => models.iter().map(|m| m.name()).collect(),
            GenerationContext::Model { model, .. } => {
                model.fields().iter().map(|f| f.name.as_str()).collect()
            }
        };
        Ok(format!("{}:{}", template.id(), names.join(",")).into_bytes())
    }
}

struct BodyIsIdStore;

impl TemplateStore for BodyIsIdStore {
    fn get(&self, id: &str) -> GantryResult<TemplateSource> {
        Ok(TemplateSource::new(id, id))
    }

    fn list(&self) -> GantryResult<Vec<TemplateSource>> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
struct RecordingFs {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, _path: &Path) -> GantryResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()> {
        self.files
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf> {
        Ok(PathBuf::from("/tmp").join(prefix))
    }
}

struct CountingArchiver {
    fs: RecordingFs,
}

impl Archiver for CountingArchiver {
    fn archive(&self, root: &Path) -> GantryResult<PackedArchive> {
        let files = self.fs.files.lock().unwrap();
        let names: Vec<_> = files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        Ok(PackedArchive {
            entries: names.len(),
            bytes: names.join("\n").into_bytes(),
        })
    }
}

const BOOKSTORE: &str = "\
Book
Title string required
Price float64 gorm:\"index\"

Author
Name string binding:\"required,min=2\"
";

#[test]
fn parse_then_plan_lays_out_every_file() {
    let outcome = DslParser::new().parse(BOOKSTORE);
    assert!(outcome.is_clean());

    let scaffolder = ScaffoldService::new(
        Box::new(BodyIsIdStore),
        Box::new(FieldListRenderer),
        Box::new(RecordingFs::default()),
    );
    let project = ProjectIdentity::new("bookstore", "github.com/acme/bookstore", "8080");
    let structure = scaffolder.plan(&project, &outcome.models).unwrap();

    assert_eq!(structure.file_count(), expected_file_count(2));
    assert_eq!(
        structure.file("pkg/api/server.go").unwrap().content,
        b"server:Book,Author"
    );
    assert_eq!(
        structure.file("pkg/models/book.go").unwrap().content,
        b"model:Title,Price"
    );
    assert_eq!(
        structure.file("api/author.yaml").unwrap().content,
        b"apispec:Name"
    );
    assert!(structure
        .entries()
        .iter()
        .any(|e| matches!(e, FsEntry::Directory(d) if d.path == Path::new("migrations"))));
}

#[test]
fn generate_packages_the_staged_tree() {
    let fs = RecordingFs::default();
    let service = GenerationService::new(
        Box::new(BodyIsIdStore),
        Box::new(FieldListRenderer),
        Box::new(fs.clone()),
        Box::new(CountingArchiver { fs: fs.clone() }),
    );
    let request = GenerationRequest::new(
        ProjectIdentity::new("bookstore", "github.com/acme/bookstore", "8080"),
        BOOKSTORE,
    );

    let archive = service.generate(&request).unwrap();
    let listing = String::from_utf8(archive.bytes).unwrap();

    assert_eq!(archive.filename, "bookstore.zip");
    assert_eq!(archive.entry_count, 16);
    assert_eq!(listing.lines().count(), 16);
    assert!(listing.lines().any(|l| l == "pkg/handlers/author.go"));
    assert!(fs.files.lock().unwrap().is_empty(), "staging tree not removed");
}
