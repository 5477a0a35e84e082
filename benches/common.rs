// Shared benchmark helpers
#![allow(dead_code)]

use tempfile::TempDir;

/// Create `dirs` directories of `files_per_dir` files each, `file_size` bytes apiece
pub fn create_bench_tree(dirs: usize, files_per_dir: usize, file_size: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let content = vec![b'x'; file_size];
    for d in 0..dirs {
        let sub = dir.path().join(format!("dir_{}/nested_{}", d, d % 4));
        std::fs::create_dir_all(&sub).unwrap();
        for f in 0..files_per_dir {
            std::fs::write(sub.join(format!("file_{}.bin", f)), &content).unwrap();
        }
    }
    dir
}
