mod files;

pub use files::FilesService;
