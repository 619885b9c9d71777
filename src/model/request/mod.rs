pub mod share_requests;
