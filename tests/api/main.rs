mod health_check;
mod helper;
mod index;
