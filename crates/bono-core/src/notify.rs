//! User-facing notices for operation outcomes

use crate::error::Error;
use crate::sync::FolderDeletionReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown after an operation finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NoticeKind::Error)
    }

    pub fn pasted() -> Self {
        Self::success("URL이 붙여넣기되었습니다!")
    }

    pub fn paste_failed() -> Self {
        Self::error("붙여넣기 실패. 권한을 확인해주세요.")
    }

    pub fn bookmark_added(folder: &str) -> Self {
        Self::success(format!("{folder} 폴더에 저장되었습니다!"))
    }

    pub fn add_failed() -> Self {
        Self::error("북마크 추가에 실패했습니다")
    }

    pub fn bookmark_deleted() -> Self {
        Self::success("북마크가 삭제되었습니다")
    }

    pub fn delete_failed() -> Self {
        Self::error("북마크 삭제에 실패했습니다")
    }

    pub fn folder_added() -> Self {
        Self::success("새 폴더가 추가되었습니다!")
    }

    pub fn bookmark_updated() -> Self {
        Self::success("북마크가 수정되었습니다!")
    }

    pub fn update_failed() -> Self {
        Self::error("북마크 수정에 실패했습니다")
    }

    /// Outcome of toggling the reviewed flag to `is_checked`
    pub fn checked_changed(is_checked: bool) -> Self {
        if is_checked {
            Self::success("확인으로 표시했습니다")
        } else {
            Self::success("미확인으로 표시했습니다")
        }
    }

    pub fn check_failed() -> Self {
        Self::error("상태 변경에 실패했습니다")
    }

    /// One aggregate notice for a whole folder deletion
    pub fn folder_deleted(report: &FolderDeletionReport) -> Self {
        if report.is_complete() {
            Self::success("폴더가 삭제되었습니다")
        } else {
            Self::error(format!(
                "폴더 삭제에 실패했습니다 ({}/{}개 실패)",
                report.failed.len(),
                report.total()
            ))
        }
    }

    pub fn folder_delete_failed() -> Self {
        Self::error("폴더 삭제에 실패했습니다")
    }

    pub fn sync_failed() -> Self {
        Self::error("북마크를 불러오지 못했습니다")
    }

    /// Notice for an input rejected before any remote call
    pub fn from_validation(error: &Error) -> Self {
        match error {
            Error::EmptyUrl => Self::error("URL을 붙여넣어주세요"),
            Error::EmptyFolderName => Self::error("폴더명을 입력해주세요"),
            Error::DuplicateFolder(_) => Self::error("이미 존재하는 폴더명입니다"),
            Error::UnknownFolder(name) => Self::error(format!("{name} 폴더를 찾을 수 없습니다")),
            Error::LastFolder => Self::error("마지막 폴더는 삭제할 수 없습니다"),
            Error::FolderDeletionInProgress => Self::error("폴더 삭제가 진행 중입니다"),
            Error::InvalidInput(reason) => Self::error(format!("잘못된 요청입니다: {reason}")),
            other => Self::error(other.to_string()),
        }
    }
}
