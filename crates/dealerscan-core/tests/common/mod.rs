pub mod inventory_server;
