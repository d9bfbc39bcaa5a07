pub mod apiv1;
