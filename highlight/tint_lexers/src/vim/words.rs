//! Built-in Vim script word lists.

/// Words that start a command and may open or close a fold.
pub(super) const KEYWORDS: &str = "
    au autocmd break call catch const continue def echo else elseif end enddef
    endfor endfun endfunc endfunction endif endtry endwhile export final finally
    for fu fun func function if import in let return throw try unlet var while
";

pub(super) const COMMANDS: &str = "
    augroup colorscheme command compiler edit exe execute filetype hi highlight
    imap inoremap map nmap nnoremap noremap normal runtime set setlocal source syn
    syntax vim9script vmap vnoremap
";
