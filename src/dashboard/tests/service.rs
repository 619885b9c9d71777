mod reduce_tests {
    use crate::dashboard::models::{DashboardAction, DashboardState, ViewMode};
    use crate::dashboard::service::{dashboard_view, reduce};
    use crate::model::platforms::PlatformFilter;
    use crate::repository::SampleCatalog;

    #[test]
    fn set_search_updates_the_query() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SetSearch {
                query: "video".to_string(),
            },
        );
        assert_eq!("video", state.search_query);
    }

    #[test]
    fn select_folder_selects_it() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SelectFolder {
                folder_id: "2".to_string(),
            },
        );
        assert_eq!(Some("2".to_string()), state.selected_folder);
    }

    #[test]
    fn selecting_the_same_folder_again_clears_it() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SelectFolder {
                folder_id: "2".to_string(),
            },
        );
        let state = reduce(
            state,
            DashboardAction::SelectFolder {
                folder_id: "2".to_string(),
            },
        );
        assert_eq!(None, state.selected_folder);
    }

    #[test]
    fn selecting_a_different_folder_switches() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SelectFolder {
                folder_id: "2".to_string(),
            },
        );
        let state = reduce(
            state,
            DashboardAction::SelectFolder {
                folder_id: "3".to_string(),
            },
        );
        assert_eq!(Some("3".to_string()), state.selected_folder);
    }

    #[test]
    fn set_tab_switches_the_platform_filter() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SetTab {
                tab: PlatformFilter::Youtube,
            },
        );
        assert_eq!(PlatformFilter::Youtube, state.active_tab);
    }

    #[test]
    fn open_share_dialog_tracks_the_file() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::OpenShareDialog {
                file_id: "1".to_string(),
            },
        );
        assert!(state.share_dialog_open);
        assert_eq!(Some("1".to_string()), state.selected_file);
    }

    #[test]
    fn close_share_dialog_keeps_the_selected_file() {
        let state = reduce(
            DashboardState::default(),
            DashboardAction::OpenShareDialog {
                file_id: "1".to_string(),
            },
        );
        let state = reduce(state, DashboardAction::CloseShareDialog);
        assert!(!state.share_dialog_open);
        assert_eq!(Some("1".to_string()), state.selected_file);
    }

    #[test]
    fn upload_dialog_opens_and_closes() {
        let state = reduce(DashboardState::default(), DashboardAction::OpenUploadDialog);
        assert!(state.upload_dialog_open);
        let state = reduce(state, DashboardAction::CloseUploadDialog);
        assert!(!state.upload_dialog_open);
    }

    #[test]
    fn view_mode_never_changes_the_visible_set() {
        let catalog = SampleCatalog::new();
        let state = reduce(
            DashboardState::default(),
            DashboardAction::SetSearch {
                query: "video".to_string(),
            },
        );
        let grid_files = dashboard_view(&catalog, &state).files;
        let state = reduce(
            state,
            DashboardAction::SetViewMode {
                mode: ViewMode::List,
            },
        );
        let list_view = dashboard_view(&catalog, &state);
        assert_eq!(ViewMode::List, list_view.state.view_mode);
        assert_eq!(grid_files, list_view.files);
    }
}

mod dashboard_view_tests {
    use crate::dashboard::models::DashboardState;
    use crate::dashboard::service::dashboard_view;
    use crate::repository::SampleCatalog;

    #[test]
    fn default_state_shows_everything_under_all_files() {
        let catalog = SampleCatalog::new();
        let view = dashboard_view(&catalog, &DashboardState::default());
        assert_eq!("All Files", view.title);
        assert_eq!(6, view.file_count);
        assert_eq!(6, view.files.len());
        assert_eq!(4, view.folders.len());
    }

    #[test]
    fn selected_folder_names_the_heading() {
        let catalog = SampleCatalog::new();
        let state = DashboardState {
            selected_folder: Some("3".to_string()),
            ..DashboardState::default()
        };
        let view = dashboard_view(&catalog, &state);
        assert_eq!("Development", view.title);
        assert_eq!(1, view.file_count);
    }

    #[test]
    fn unknown_folder_keeps_the_all_files_heading() {
        let catalog = SampleCatalog::new();
        let state = DashboardState {
            selected_folder: Some("999".to_string()),
            ..DashboardState::default()
        };
        let view = dashboard_view(&catalog, &state);
        assert_eq!("All Files", view.title);
        assert_eq!(0, view.file_count);
    }

    #[test]
    fn the_state_travels_with_the_view() {
        let catalog = SampleCatalog::new();
        let state = DashboardState {
            search_query: "zip".to_string(),
            ..DashboardState::default()
        };
        let view = dashboard_view(&catalog, &state);
        assert_eq!(state, view.state);
    }
}

mod session_tests {
    use crate::dashboard::models::{DashboardAction, DashboardState, Session};
    use crate::dashboard::service::{login, logout, reduce};
    use crate::model::response::NotificationLevel;

    #[test]
    fn login_welcomes_the_user() {
        let mut session = Session::default();
        let notification = login(&mut session);
        assert!(session.logged_in);
        assert_eq!(NotificationLevel::Success, notification.level);
        assert_eq!("Welcome to CloudDrive!", notification.message);
    }

    #[test]
    fn logout_resets_the_dashboard_state() {
        let mut session = Session::default();
        login(&mut session);
        session.state = reduce(
            session.state,
            DashboardAction::SetSearch {
                query: "video".to_string(),
            },
        );
        let notification = logout(&mut session);
        assert!(!session.logged_in);
        assert_eq!(DashboardState::default(), session.state);
        assert_eq!("Logged out successfully", notification.message);
    }
}
