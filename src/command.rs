#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelCompose,
  CancelEdit,
  DeleteSelected,
  DismissAlert,
  HideHelp,
  LoadMore,
  None,
  OpenInBrowser,
  PageDown,
  PageUp,
  Quit,
  Reload,
  SelectAll,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartCompose,
  StartEdit,
  SubmitCompose,
  SubmitEdit,
  ToggleChecked,
}
