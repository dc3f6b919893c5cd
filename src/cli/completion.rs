// src/cli/completion.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File name used when the completion script is saved into a directory.
pub const COMPLETION_FILE: &str = "bm.bash";

const STORE_PLACEHOLDER: &str = "@STORE_PATH@";

const BASH_TEMPLATE: &str = r#"_bm() {
    local cur prev opts
    COMPREPLY=()
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"
    opts="-a --add -d --delete -g --go -p --print -l --list -h --help -v --version -c --completion"

    case "${prev}" in
        -g|--go|-d|--delete|-p|--print)
            local bookmarks=$(awk -F '=' '/^export DIR_/ {gsub(/^export DIR_/, "", $1); print $1}' "@STORE_PATH@")
            COMPREPLY=( $(compgen -W "${bookmarks}" -- ${cur}) )
            return 0
            ;;
    esac

    COMPREPLY=( $(compgen -W "${opts}" -- ${cur}) )
    return 0
}
complete -F _bm bm"#;

/// Bash completion for `bm`; bookmark names are read from `store_path` at completion time.
///
/// ```bash
/// # one-time use
/// eval "$(bm --completion)"
///
/// # permanent install
/// bm --completion /etc/bash_completion.d
/// ```
pub fn generate_completion_script(store_path: &Path) -> String {
    BASH_TEMPLATE.replace(STORE_PLACEHOLDER, &store_path.display().to_string())
}

/// Writes the script to `<dir>/bm.bash` and returns the written file.
#[instrument(level = "debug")]
pub fn save_completion_script(dir: &Path, store_path: &Path) -> io::Result<PathBuf> {
    let target = dir.join(COMPLETION_FILE);
    fs::write(&target, generate_completion_script(store_path))?;
    debug!("Completion script written to {:?}", target);
    Ok(target)
}
